//! Mixed layer and boundary layer depth diagnostics.
//!
//! Scans depth-time profiles of temperature, potential density,
//! stratification, turbulent diffusivity, or turbulent kinetic energy and
//! derives one scalar depth per time step.
//!
//! # Definitions
//!
//! - **Mixed layer depth (MLD)**: depth where a tracer first differs from
//!   a near-surface reference value by more than a threshold. Two
//!   variants: temperature (absolute difference) and potential density
//!   (signed, positive-downward difference).
//! - **Boundary layer depth (BLD)**: vertical extent of active turbulent
//!   mixing, defined either by the depth of maximum stratification N² or
//!   by the depth where diffusivity/TKE first drops to a background
//!   value, with linear interpolation to the exact crossing.
//!
//! All diagnostics report depth as a non-negative magnitude in meters and
//! never mutate their input. Threshold no-crossing cases resolve to a
//! well-defined fallback level, not an error; NaN values are treated as
//! "no signal" and skipped.
//!
//! # Example
//!
//! ```
//! use ocndiag::diagnostics::{mld_delta_t, MldParams};
//! use ocndiag::field::Profile;
//!
//! // A 4-level, 1-step temperature profile, deepest level first.
//! let z = vec![-40.0, -25.0, -10.0, -1.0];
//! let temp = Profile::new("temp", z, vec![0.0], vec![14.0, 14.9, 15.0, 15.0]).unwrap();
//!
//! let mld = mld_delta_t(&temp, &MldParams::temperature());
//! assert!((mld.values[0] - 40.0).abs() < 1e-12);
//! ```

mod bld;
mod mld;

pub use bld::{bld_max_nn, bld_nuh, bld_tke};
pub use mld::{mld_delta_t, mld_delta_r, MldParams};

#[cfg(feature = "parallel")]
pub use bld::{bld_max_nn_parallel, bld_nuh_parallel, bld_tke_parallel};
#[cfg(feature = "parallel")]
pub use mld::{mld_delta_t_parallel, mld_delta_r_parallel};

use crate::field::{DepthSeries, Profile};

/// Evaluate a per-time-step diagnostic sequentially.
fn collect_series<F>(profile: &Profile, long_name: &str, per_step: F) -> DepthSeries
where
    F: Fn(usize) -> f64,
{
    let values = (0..profile.nt()).map(per_step).collect();
    DepthSeries {
        time: profile.time().to_vec(),
        values,
        long_name: long_name.to_string(),
        units: "m",
    }
}

/// Evaluate a per-time-step diagnostic across a rayon thread pool.
///
/// Time steps are independent, so the result is identical to the
/// sequential evaluation.
#[cfg(feature = "parallel")]
fn collect_series_parallel<F>(profile: &Profile, long_name: &str, per_step: F) -> DepthSeries
where
    F: Fn(usize) -> f64 + Sync,
{
    use rayon::prelude::*;

    let values = (0..profile.nt()).into_par_iter().map(per_step).collect();
    DepthSeries {
        time: profile.time().to_vec(),
        values,
        long_name: long_name.to_string(),
        units: "m",
    }
}
