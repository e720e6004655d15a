//! Labeled numeric arrays with coordinates and metadata.
//!
//! The diagnostics operate on plain in-memory arrays carrying their
//! coordinate axes and descriptive metadata (name, long name, physical
//! unit), analogous to a labeled multi-dimensional array. Nothing here
//! performs I/O; loading model output into these types is the caller's
//! concern.
//!
//! # Example
//!
//! ```
//! use ocndiag::field::Profile;
//!
//! // Two depth levels, three time steps, level-major storage.
//! let z = vec![-20.0, -1.0];
//! let time = vec![0.0, 3600.0, 7200.0];
//! let values = vec![
//!     10.0, 10.1, 10.2, // level 0 (z = -20)
//!     15.0, 15.1, 15.2, // level 1 (z = -1)
//! ];
//! let temp = Profile::new("temp", z, time, values)
//!     .unwrap()
//!     .with_long_name("potential temperature")
//!     .with_units("degC");
//!
//! assert_eq!(temp.nz(), 2);
//! assert_eq!(temp.nt(), 3);
//! assert!((temp.value(1, 2) - 15.2).abs() < 1e-12);
//! ```

use crate::error::FieldError;

/// A time-varying depth profile: one value per (depth level, time step).
///
/// Values are stored level-major: `values[k * nt + i]` is level `k` at
/// time step `i`. The depth coordinate must be strictly monotonic (either
/// direction, negative-down convention) and is fixed across time. Missing
/// data is represented by NaN and treated as "no signal" by the
/// diagnostics.
#[derive(Clone, Debug)]
pub struct Profile {
    name: String,
    long_name: String,
    units: String,
    z: Vec<f64>,
    time: Vec<f64>,
    values: Vec<f64>,
}

impl Profile {
    /// Create a profile from coordinate axes and level-major values.
    ///
    /// Validates that both axes are non-empty, that `values` has exactly
    /// `z.len() * time.len()` entries, and that `z` is strictly monotonic.
    pub fn new(
        name: impl Into<String>,
        z: Vec<f64>,
        time: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self, FieldError> {
        let name = name.into();
        if z.is_empty() {
            return Err(FieldError::EmptyAxis { name, axis: "depth" });
        }
        if time.is_empty() {
            return Err(FieldError::EmptyAxis { name, axis: "time" });
        }
        let expected = z.len() * time.len();
        if values.len() != expected {
            return Err(FieldError::ShapeMismatch {
                name,
                nz: z.len(),
                nt: time.len(),
                expected,
                actual: values.len(),
            });
        }
        if z.len() > 1 {
            let ascending = z[1] > z[0];
            for k in 1..z.len() {
                let ok = if ascending { z[k] > z[k - 1] } else { z[k] < z[k - 1] };
                if !ok {
                    return Err(FieldError::NonMonotonicDepth { name, level: k });
                }
            }
        }
        Ok(Self {
            name,
            long_name: String::new(),
            units: String::new(),
            z,
            time,
            values,
        })
    }

    /// Attach a descriptive long name.
    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = long_name.into();
        self
    }

    /// Attach a physical unit string.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Short variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptive long name (may be empty).
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Physical unit string (may be empty).
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Number of depth levels.
    pub fn nz(&self) -> usize {
        self.z.len()
    }

    /// Number of time steps.
    pub fn nt(&self) -> usize {
        self.time.len()
    }

    /// Depth coordinate (m, negative down).
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Time coordinate.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Value at depth level `k`, time step `i`.
    #[inline]
    pub fn value(&self, k: usize, i: usize) -> f64 {
        self.values[k * self.time.len() + i]
    }

    /// True if the depth coordinate increases with level index
    /// (deepest level first, surface last).
    pub fn z_ascending(&self) -> bool {
        self.z.len() < 2 || self.z[1] > self.z[0]
    }

    /// Index of the deepest level (minimum z).
    pub fn deepest_level(&self) -> usize {
        if self.z_ascending() { 0 } else { self.z.len() - 1 }
    }
}

/// A scalar depth diagnostic per time step.
///
/// Values are non-negative depth magnitudes in meters, aligned with the
/// time axis of the profile that produced them. Created fresh per call and
/// never mutated afterward.
#[derive(Clone, Debug)]
pub struct DepthSeries {
    /// Time coordinate, copied from the source profile.
    pub time: Vec<f64>,
    /// Depth magnitude per time step (m, non-negative).
    pub values: Vec<f64>,
    /// Descriptive long name, e.g. "mixed layer depth (T threshold)".
    pub long_name: String,
    /// Physical unit, always "m" for depth diagnostics.
    pub units: &'static str,
}

impl DepthSeries {
    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A depth profile of Stokes drift velocity.
///
/// `us` and `vs` are the x and y horizontal components aligned with the
/// input depth coordinate. Integrators without directional information
/// leave `vs` zero-filled.
#[derive(Clone, Debug)]
pub struct DriftProfile {
    /// Depth coordinate (m, negative down), copied from the input.
    pub z: Vec<f64>,
    /// x component of Stokes drift (m/s), one per depth.
    pub us: Vec<f64>,
    /// y component of Stokes drift (m/s), one per depth.
    pub vs: Vec<f64>,
    /// Descriptive long name.
    pub long_name: String,
    /// Physical unit, always "m/s".
    pub units: &'static str,
}

impl DriftProfile {
    /// Number of depth levels.
    pub fn len(&self) -> usize {
        self.us.len()
    }

    /// Check if the profile is empty.
    pub fn is_empty(&self) -> bool {
        self.us.is_empty()
    }

    /// Drift magnitude sqrt(us² + vs²) at depth level `k`.
    pub fn magnitude(&self, k: usize) -> f64 {
        self.us[k].hypot(self.vs[k])
    }
}
