//! # ocndiag
//!
//! Post-processing diagnostics for one-dimensional ocean turbulence model
//! output.
//!
//! This crate provides two independent, stateless computational engines
//! over in-memory numeric arrays:
//!
//! - Profile diagnostics: mixed layer depth from temperature or potential
//!   density thresholds, boundary layer depth from the stratification
//!   maximum or from diffusivity/TKE threshold crossings.
//! - Stokes drift: depth-resolved drift profiles from a parametric
//!   Donelan et al. (1985) wave spectrum, from a discretized band
//!   spectrum with an optional analytic f^-5 tail, or from partitioned
//!   surface drift components.
//!
//! Inputs and outputs are plain arrays with attached coordinates and
//! metadata ([`field`]); nothing here performs I/O or holds process-wide
//! state. With the `parallel` feature the profile diagnostics gain
//! rayon-backed variants that map over time steps.

pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod field;
pub mod stokes;

// Re-export main types for convenience
pub use constants::{
    DEFAULT_DELTA_R, DEFAULT_DELTA_T, DEFAULT_NUH_BG, DEFAULT_TKE_CRIT, DEFAULT_Z_REF, GRAVITY,
};
pub use diagnostics::{bld_max_nn, bld_nuh, bld_tke, mld_delta_r, mld_delta_t, MldParams};
pub use error::{FieldError, ShapeError};
pub use field::{DepthSeries, DriftProfile, Profile};
pub use stokes::{
    stokes_drift_dhh85, stokes_drift_spec, stokes_drift_usp, BandSpectrum, Dhh85Params,
    VerticalGrid,
};

#[cfg(feature = "parallel")]
pub use diagnostics::{
    bld_max_nn_parallel, bld_nuh_parallel, bld_tke_parallel, mld_delta_r_parallel,
    mld_delta_t_parallel,
};
