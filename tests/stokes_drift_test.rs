//! Integration tests for the Stokes drift integrators.
//!
//! Cross-checks the parametric, discretized-band, and partitioned
//! integrators against each other and against closed-form limits.

use std::f64::consts::PI;

use ocndiag::{
    stokes_drift_dhh85, stokes_drift_spec, stokes_drift_usp, BandSpectrum, Dhh85Params, GRAVITY,
    VerticalGrid,
};

/// Cell-centered depth levels of uniform thickness `dz` starting just
/// below the surface.
fn cell_centers(n: usize, dz: f64) -> Vec<f64> {
    (0..n).map(|k| -0.5 * dz - dz * k as f64).collect()
}

/// Donelan et al. (1985) energy density at angular frequency `omega`,
/// written out independently of the library kernel.
fn dhh85_energy_density(omega: f64, wind_speed: f64, wave_age: f64) -> f64 {
    let iwa = 1.0 / wave_age;
    let omega_p = GRAVITY * iwa / wind_speed;
    let alpha = 0.006 * iwa.powf(0.55);
    let sigma = 0.08 * (1.0 + 4.0 * wave_age.powi(3));
    let gamma1 = if iwa <= 1.0 {
        1.7
    } else {
        1.7 + 6.0 * iwa.log10()
    };
    let gamma2 =
        (-0.5 * (omega - omega_p).powi(2) / (sigma * sigma * omega_p * omega_p)).exp();
    alpha * GRAVITY * GRAVITY / (omega_p * omega.powi(4))
        * (-(omega_p / omega).powi(4)).exp()
        * gamma1.powf(gamma2)
}

#[test]
fn test_dhh85_reference_magnitude() {
    // Fixed conditions with a known drift profile: 10 m/s wind, wave age
    // 1.2, 30 one-meter layers.
    let z = cell_centers(30, 1.0);
    let drift = stokes_drift_dhh85(&z, 10.0, 1.2, &Dhh85Params::default()).unwrap();
    assert!(
        (drift.us[0] - 0.159).abs() < 2e-3,
        "surface drift {} m/s outside expected range",
        drift.us[0]
    );
    for k in 1..drift.len() {
        assert!(drift.us[k] < drift.us[k - 1], "no decay at level {}", k);
    }
}

#[test]
fn test_band_integration_reproduces_parametric_kernel() {
    // Feeding the DHH85 spectrum through the band integrator as a dense
    // discretized spectrum must reproduce the parametric integrator:
    // E(f) df = S(omega) domega with f = omega / 2pi, and the fine grid
    // keeps every wavenumber-thickness product below both attenuation
    // cutoffs.
    let wind_speed = 10.0;
    let wave_age = 1.2;
    let z = cell_centers(50, 0.2);
    let params = Dhh85Params::default();

    let n = params.n_omega;
    let domega = (params.omega_max - params.omega_min) / (n - 1) as f64;
    let mut energy = Vec::with_capacity(n);
    let mut freq = Vec::with_capacity(n);
    for j in 0..n {
        let omega = params.omega_min + domega * j as f64;
        freq.push(omega / (2.0 * PI));
        energy.push(2.0 * PI * dhh85_energy_density(omega, wind_speed, wave_age));
    }
    let xcmp = vec![1.0; n];
    let ycmp = vec![0.0; n];
    let dfreq = vec![domega / (2.0 * PI); n];
    let spectrum = BandSpectrum {
        energy: &energy,
        xcmp: &xcmp,
        ycmp: &ycmp,
        freq: &freq,
        dfreq: &dfreq,
    };

    let parametric = stokes_drift_dhh85(&z, wind_speed, wave_age, &params).unwrap();
    let banded = stokes_drift_spec(&z, &spectrum, false).unwrap();

    for k in 0..z.len() {
        let rel = (parametric.us[k] - banded.us[k]).abs() / parametric.us[0];
        assert!(
            rel < 1e-6,
            "level {}: parametric {} vs banded {}",
            k,
            parametric.us[k],
            banded.us[k]
        );
    }
}

#[test]
fn test_usp_reconstructs_band_integration() {
    // The partitioned integrator applied to the unattenuated surface
    // factor of each band must reproduce the band integrator exactly:
    // both apply the same attenuation per (depth, band) pair.
    let z = cell_centers(25, 2.0);
    let energy = [1.8, 0.9, 0.3];
    let xcmp = [0.9, 0.7, 0.5];
    let ycmp = [0.1, 0.3, 0.5];
    let freq = [0.08, 0.12, 0.2];
    let dfreq = [0.04, 0.04, 0.1];
    let spectrum = BandSpectrum {
        energy: &energy,
        xcmp: &xcmp,
        ycmp: &ycmp,
        freq: &freq,
        dfreq: &dfreq,
    };

    let factor_const = 8.0 * PI * PI / GRAVITY;
    let mut us0 = [0.0; 3];
    let mut vs0 = [0.0; 3];
    for i in 0..3 {
        let factor2 = factor_const * freq[i] * freq[i];
        let surface = 2.0 * PI * freq[i] * dfreq[i] * factor2 * energy[i];
        us0[i] = surface * xcmp[i];
        vs0[i] = surface * ycmp[i];
    }

    let banded = stokes_drift_spec(&z, &spectrum, false).unwrap();
    let partitioned = stokes_drift_usp(&z, &us0, &vs0, &freq).unwrap();

    for k in 0..z.len() {
        assert!(
            (banded.us[k] - partitioned.us[k]).abs() < 1e-14,
            "x mismatch at level {}",
            k
        );
        assert!(
            (banded.vs[k] - partitioned.vs[k]).abs() < 1e-14,
            "y mismatch at level {}",
            k
        );
    }
}

#[test]
fn test_tail_respects_directional_split() {
    let z = cell_centers(10, 1.0);
    let energy = [1.0];
    let xcmp = [0.6];
    let ycmp = [0.8];
    let freq = [0.15];
    let dfreq = [0.1];
    let spectrum = BandSpectrum {
        energy: &energy,
        xcmp: &xcmp,
        ycmp: &ycmp,
        freq: &freq,
        dfreq: &dfreq,
    };

    let without = stokes_drift_spec(&z, &spectrum, false).unwrap();
    let with = stokes_drift_spec(&z, &spectrum, true).unwrap();
    for k in 0..z.len() {
        let tail_x = with.us[k] - without.us[k];
        let tail_y = with.vs[k] - without.vs[k];
        assert!(tail_x > 0.0, "tail must add x drift at level {}", k);
        // Same scalar tail split by the last band's fractions.
        assert!(
            (tail_x * 0.8 - tail_y * 0.6).abs() < 1e-12,
            "tail split broken at level {}",
            k
        );
    }
}

#[test]
fn test_vertical_grid_shared_between_integrators() {
    // The grid primitive itself: interfaces start at the surface and
    // never ascend; a single level degenerates without error. On a
    // cell-centered grid the surface stencil assigns the first level a
    // zero thickness, so the descent is only non-strict.
    let z = cell_centers(5, 2.0);
    let grid = VerticalGrid::from_depths(&z).unwrap();
    let zi = grid.interfaces();
    assert_eq!(zi.len(), 6);
    assert!(zi[0].abs() < 1e-12);
    for k in 1..zi.len() {
        assert!(zi[k] <= zi[k - 1]);
    }
    assert!(zi[5] < -6.0, "interfaces must cover most of the column");

    let single = VerticalGrid::from_depths(&[-3.0]).unwrap();
    assert!(single.thicknesses()[0] >= 1.0e6);
}

#[test]
fn test_surface_drift_reported_in_meters_per_second() {
    let z = cell_centers(4, 1.0);
    let drift = stokes_drift_dhh85(&z, 8.0, 1.0, &Dhh85Params::default()).unwrap();
    assert_eq!(drift.units, "m/s");
    assert_eq!(drift.z.len(), drift.us.len());
    assert_eq!(drift.us.len(), drift.vs.len());
}
