//! Physical constants and diagnostic defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Default temperature threshold for mixed layer depth (°C).
pub const DEFAULT_DELTA_T: f64 = 0.2;

/// Default potential density threshold for mixed layer depth (kg/m³).
pub const DEFAULT_DELTA_R: f64 = 0.03;

/// Default reference depth for mixed layer diagnostics (m, negative down).
pub const DEFAULT_Z_REF: f64 = -10.0;

/// Default background turbulent diffusivity (m²/s).
pub const DEFAULT_NUH_BG: f64 = 1e-5;

/// Default critical turbulent kinetic energy (m²/s²).
pub const DEFAULT_TKE_CRIT: f64 = 1e-7;
