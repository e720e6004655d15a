//! Threshold-based mixed layer depth diagnostics.
//!
//! The mixed layer depth is the depth where a tracer first differs from
//! its value at a near-surface reference level by more than a threshold,
//! scanning from the reference level toward the bottom. Levels at or
//! above the reference and NaN values never qualify; if no level
//! qualifies, the deepest level is reported.

use super::collect_series;
use crate::constants::{DEFAULT_DELTA_R, DEFAULT_DELTA_T, DEFAULT_Z_REF};
use crate::field::{DepthSeries, Profile};

/// Threshold and reference depth for a mixed layer depth diagnostic.
#[derive(Clone, Copy, Debug)]
pub struct MldParams {
    /// Tracer difference threshold; must be strictly positive.
    pub threshold: f64,
    /// Depth of the reference level (m, negative down). The nearest
    /// profile level is used.
    pub z_ref: f64,
}

impl MldParams {
    /// Create parameters with an explicit threshold and reference depth.
    pub fn new(threshold: f64, z_ref: f64) -> Self {
        Self { threshold, z_ref }
    }

    /// Default parameters for the temperature criterion:
    /// deltaT = 0.2 °C at z_ref = -10 m.
    pub fn temperature() -> Self {
        Self {
            threshold: DEFAULT_DELTA_T,
            z_ref: DEFAULT_Z_REF,
        }
    }

    /// Default parameters for the potential density criterion:
    /// deltaR = 0.03 kg/m³ at z_ref = -10 m.
    pub fn density() -> Self {
        Self {
            threshold: DEFAULT_DELTA_R,
            z_ref: DEFAULT_Z_REF,
        }
    }
}

/// Mixed layer depth from a temperature threshold.
///
/// For each time step, the mixed layer depth is the first level below the
/// reference level whose absolute temperature difference from the
/// reference value meets or exceeds `params.threshold`. If no level
/// qualifies, the deepest level is reported. Returns depth magnitudes
/// tagged "mixed layer depth (T threshold)" in meters.
pub fn mld_delta_t(profile: &Profile, params: &MldParams) -> DepthSeries {
    collect_series(profile, "mixed layer depth (T threshold)", |i| {
        mld_column(profile, i, params, false)
    })
}

/// Mixed layer depth from a potential density threshold.
///
/// Identical scan to [`mld_delta_t`], but the crossing test is signed:
/// only a density excess of at least `params.threshold` over the
/// reference value qualifies, since density must increase downward across
/// the mixed layer base. Returns depth magnitudes tagged
/// "mixed layer depth (rho threshold)" in meters.
pub fn mld_delta_r(profile: &Profile, params: &MldParams) -> DepthSeries {
    collect_series(profile, "mixed layer depth (rho threshold)", |i| {
        mld_column(profile, i, params, true)
    })
}

/// Parallel variant of [`mld_delta_t`]; maps time steps across a rayon
/// thread pool with identical per-step results.
#[cfg(feature = "parallel")]
pub fn mld_delta_t_parallel(profile: &Profile, params: &MldParams) -> DepthSeries {
    super::collect_series_parallel(profile, "mixed layer depth (T threshold)", |i| {
        mld_column(profile, i, params, false)
    })
}

/// Parallel variant of [`mld_delta_r`].
#[cfg(feature = "parallel")]
pub fn mld_delta_r_parallel(profile: &Profile, params: &MldParams) -> DepthSeries {
    super::collect_series_parallel(profile, "mixed layer depth (rho threshold)", |i| {
        mld_column(profile, i, params, true)
    })
}

/// Index of the profile level nearest to `z_ref` (first index on ties).
fn nearest_level(z: &[f64], z_ref: f64) -> usize {
    let mut best = 0;
    let mut best_dist = (z[0] - z_ref).abs();
    for (k, &zk) in z.iter().enumerate().skip(1) {
        let dist = (zk - z_ref).abs();
        if dist < best_dist {
            best = k;
            best_dist = dist;
        }
    }
    best
}

/// Scan one time step for the first threshold crossing below the
/// reference level.
///
/// The scan runs outward from the level adjacent to the reference on the
/// deep side toward the bottom, in the direction implied by the monotonic
/// depth ordering. NaN differences are skipped explicitly rather than
/// zeroed out, so tracer values that legitimately equal a sentinel can
/// never be misread.
fn mld_column(profile: &Profile, i: usize, params: &MldParams, signed: bool) -> f64 {
    let z = profile.z();
    let k_ref = nearest_level(z, params.z_ref);
    let v_ref = profile.value(k_ref, i);

    let crosses = |k: usize| -> bool {
        let diff = profile.value(k, i) - v_ref;
        if !diff.is_finite() {
            return false;
        }
        if signed {
            diff >= params.threshold
        } else {
            diff.abs() >= params.threshold
        }
    };

    // Deep side of the reference level, nearest first.
    let hit = if profile.z_ascending() {
        (0..k_ref).rev().find(|&k| crosses(k))
    } else {
        (k_ref + 1..profile.nz()).find(|&k| crosses(k))
    };

    let k = hit.unwrap_or(profile.deepest_level());
    z[k].abs()
}
