//! Boundary layer depth diagnostics.
//!
//! Two criteria for the vertical extent of active turbulent mixing:
//!
//! - the depth where the stratification N² reaches its maximum, and
//! - the depth where turbulent diffusivity or turbulent kinetic energy
//!   first drops below a small background value, with linear
//!   interpolation to the exact crossing between adjacent levels.

use super::collect_series;
use crate::field::{DepthSeries, Profile};

/// Boundary layer depth at the stratification maximum.
///
/// For each time step the level with the largest finite N² is selected;
/// ties resolve to the shallowest qualifying level by an explicit depth
/// comparison. A column with no finite value falls back to the deepest
/// level. Returns depth magnitudes tagged
/// "boundary layer depth (Max N^2)" in meters.
pub fn bld_max_nn(profile: &Profile) -> DepthSeries {
    collect_series(profile, "boundary layer depth (Max N^2)", |i| {
        max_nn_column(profile, i)
    })
}

/// Boundary layer depth from a diffusivity threshold.
///
/// For each time step, scans for levels where the turbulent diffusivity
/// falls below the background value `nuh_bg` and interpolates linearly to
/// the depth where the profile crosses it. If no level qualifies the
/// first-level depth is reported; if the crossing sits at the profile
/// bottom the last-level depth is reported. Returns depth magnitudes
/// tagged "boundary layer depth (nuh threshold)" in meters.
pub fn bld_nuh(profile: &Profile, nuh_bg: f64) -> DepthSeries {
    collect_series(profile, "boundary layer depth (nuh threshold)", |i| {
        threshold_column(profile, i, nuh_bg)
    })
}

/// Boundary layer depth from a turbulent kinetic energy threshold.
///
/// Same algorithm as [`bld_nuh`] with the critical TKE `tke_crit` as the
/// background value. Returns depth magnitudes tagged
/// "boundary layer depth (TKE threshold)" in meters.
pub fn bld_tke(profile: &Profile, tke_crit: f64) -> DepthSeries {
    collect_series(profile, "boundary layer depth (TKE threshold)", |i| {
        threshold_column(profile, i, tke_crit)
    })
}

/// Parallel variant of [`bld_max_nn`].
#[cfg(feature = "parallel")]
pub fn bld_max_nn_parallel(profile: &Profile) -> DepthSeries {
    super::collect_series_parallel(profile, "boundary layer depth (Max N^2)", |i| {
        max_nn_column(profile, i)
    })
}

/// Parallel variant of [`bld_nuh`].
#[cfg(feature = "parallel")]
pub fn bld_nuh_parallel(profile: &Profile, nuh_bg: f64) -> DepthSeries {
    super::collect_series_parallel(profile, "boundary layer depth (nuh threshold)", |i| {
        threshold_column(profile, i, nuh_bg)
    })
}

/// Parallel variant of [`bld_tke`].
#[cfg(feature = "parallel")]
pub fn bld_tke_parallel(profile: &Profile, tke_crit: f64) -> DepthSeries {
    super::collect_series_parallel(profile, "boundary layer depth (TKE threshold)", |i| {
        threshold_column(profile, i, tke_crit)
    })
}

/// Level of maximum stratification, shallowest among ties.
fn max_nn_column(profile: &Profile, i: usize) -> f64 {
    let z = profile.z();
    let mut best: Option<(usize, f64)> = None;
    for k in 0..profile.nz() {
        let v = profile.value(k, i);
        if !v.is_finite() {
            continue;
        }
        let better = match best {
            None => true,
            // Strictly larger wins; an exact tie wins only from a
            // shallower level.
            Some((kb, vb)) => v > vb || (v == vb && z[k].abs() < z[kb].abs()),
        };
        if better {
            best = Some((k, v));
        }
    }
    match best {
        Some((k, _)) => z[k].abs(),
        None => z[profile.deepest_level()].abs(),
    }
}

/// Threshold crossing with linear interpolation, shared by the
/// diffusivity and TKE criteria.
///
/// Qualifying levels are those below `crit`, excluding the last level.
/// The qualifying level with the greatest index is the crossing bracket:
/// if it is not within one level of the end of the profile, the depth is
/// interpolated between it and the next level; otherwise the last-level
/// depth is the fallback. No qualifying level at all falls back to the
/// first-level depth.
fn threshold_column(profile: &Profile, i: usize, crit: f64) -> f64 {
    let z = profile.z();
    let nz = profile.nz();

    let mut k1: Option<usize> = None;
    for k in 0..nz.saturating_sub(1) {
        if profile.value(k, i) < crit {
            k1 = Some(k);
        }
    }

    match k1 {
        None => z[0].abs(),
        Some(k1) if k1 + 2 < nz => {
            let k0 = k1 + 1;
            let v0 = profile.value(k0, i);
            let v1 = profile.value(k1, i);
            // Fraction of the layer between the bracketing levels where
            // the profile crosses crit. Nearly equal adjacent values make
            // the ratio ill-conditioned; clamp it into the layer and
            // collapse a non-finite ratio onto the k0 level.
            let mut frac = (v0 - crit) / (v0 - v1);
            if !frac.is_finite() {
                frac = 0.0;
            }
            let frac = frac.clamp(0.0, 1.0);
            (z[k0] - (z[k0] - z[k1]) * frac).abs()
        }
        Some(_) => z[nz - 1].abs(),
    }
}
