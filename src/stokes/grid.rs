//! Vertical grid derivation for depth-averaged Stokes drift integration.

use crate::error::ShapeError;

/// Per-level thickness and interface depths derived from a depth
/// coordinate.
///
/// Thickness uses centered differences for interior levels and one-sided
/// extrapolation at the two boundaries; the surface stencil can yield a
/// negative value for a level sitting at z = 0, which is harmless because
/// every thickness use in the integrators is even. Interface depths
/// accumulate thickness magnitude downward from the surface
/// (`zi[0] = 0`), so they always descend. Computed once per integration
/// call and reused for every frequency step.
///
/// A single-level grid is assigned an arbitrarily large thickness, which
/// pushes the wavenumber-thickness product past the attenuation cutoff
/// and disables the depth-averaging correction entirely.
#[derive(Clone, Debug)]
pub struct VerticalGrid {
    dz: Vec<f64>,
    zi: Vec<f64>,
}

impl VerticalGrid {
    /// Thickness assigned to a degenerate single-level grid (m).
    pub const SINGLE_LEVEL_DZ: f64 = 1.0e6;

    /// Derive the grid from a depth coordinate (m, negative down).
    pub fn from_depths(z: &[f64]) -> Result<Self, ShapeError> {
        if z.is_empty() {
            return Err(ShapeError::Empty { name: "z" });
        }
        let n = z.len();
        let dz = if n == 1 {
            vec![Self::SINGLE_LEVEL_DZ]
        } else {
            let mut dz = vec![0.0; n];
            for k in 1..n - 1 {
                dz[k] = 0.5 * (z[k - 1] - z[k + 1]);
            }
            dz[0] = -z[0] + 0.5 * (z[1] - z[0]);
            dz[n - 1] = dz[n - 2];
            dz
        };
        let mut zi = vec![0.0; n + 1];
        for k in 0..n {
            zi[k + 1] = zi[k] - dz[k].abs();
        }
        Ok(Self { dz, zi })
    }

    /// Number of depth levels.
    pub fn n_levels(&self) -> usize {
        self.dz.len()
    }

    /// Per-level thickness (m), one per depth level.
    pub fn thicknesses(&self) -> &[f64] {
        &self.dz
    }

    /// Interface depths (m), `n_levels() + 1` entries starting at the
    /// surface (0).
    pub fn interfaces(&self) -> &[f64] {
        &self.zi
    }
}
