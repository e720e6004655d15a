//! Stokes drift profile calculators.
//!
//! Integrates a wave spectrum against a depth-dependent kernel to
//! produce a depth-resolved drift velocity profile. Three entry points:
//!
//! - [`stokes_drift_dhh85`]: parametric Donelan et al. (1985) spectrum
//!   defined by wind speed and wave age, swept over a fixed band of
//!   angular frequencies.
//! - [`stokes_drift_spec`]: discretized spectrum given as parallel band
//!   arrays, with an optional analytic f^-5 tail beyond the last band
//!   (Harcourt & D'Asaro, 2008).
//! - [`stokes_drift_usp`]: partitioned surface Stokes drift components,
//!   attenuated in depth per band without re-deriving the kernel.
//!
//! # Depth-averaging correction
//!
//! All three apply a vertical attenuation of `exp(2k z)` per frequency,
//! with a `sinh(k·dz)/(k·dz)` correction that accounts for averaging the
//! exponential over a grid layer of thickness dz. Above a per-integrator
//! cutoff of the wavenumber-thickness product the correction degrades to
//! plain exponential decay so the hyperbolic sine cannot overflow. The
//! parametric kernel cuts off at 10, the band integrators at 100; the
//! two values were tuned independently for their kernel scalings and are
//! deliberately not unified.
//!
//! # Example
//!
//! ```
//! use ocndiag::stokes::{stokes_drift_dhh85, Dhh85Params};
//!
//! let z = vec![0.0, -1.0, -2.0, -5.0, -10.0];
//! let drift = stokes_drift_dhh85(&z, 10.0, 1.2, &Dhh85Params::default()).unwrap();
//! assert!(drift.us[0] > drift.us[4]);
//! ```

mod dhh85;
mod grid;
mod spectrum;

pub use dhh85::{stokes_drift_dhh85, Dhh85Params};
pub use grid::VerticalGrid;
pub use spectrum::{stokes_drift_spec, stokes_drift_usp, BandSpectrum};

/// Depth-averaging attenuation factor `sinh(kdz)/kdz`, degrading to 1
/// above `cutoff` to avoid overflow. The ratio is even in `kdz`, so the
/// magnitude is compared against the cutoff; the zero-thickness limit
/// is 1.
fn attenuation(kdz: f64, cutoff: f64) -> f64 {
    let kdz = kdz.abs();
    if kdz == 0.0 {
        1.0
    } else if kdz < cutoff {
        kdz.sinh() / kdz
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attenuation_limits() {
        assert!((attenuation(0.0, 10.0) - 1.0).abs() < 1e-12);
        assert!((attenuation(1e-8, 10.0) - 1.0).abs() < 1e-12);
        // Above the cutoff the factor is exactly 1.
        assert!((attenuation(50.0, 10.0) - 1.0).abs() < 1e-12);
        // Below the cutoff it exceeds 1 and is even.
        let a = attenuation(2.0, 10.0);
        assert!(a > 1.0);
        assert!((attenuation(-2.0, 10.0) - a).abs() < 1e-12);
    }
}
