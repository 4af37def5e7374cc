//! Item extent estimation.
//!
//! All position math uses a single per-item extent. It starts as the
//! configured estimate and may be replaced exactly once, at construction,
//! by measuring an element the rendering target already displays. Items are
//! assumed uniform: nothing is re-measured afterwards, so lists whose rows
//! change height at runtime are not supported.

/// Construction phase of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifecycle {
    /// Built but not yet measured.
    #[default]
    Uninitialized,
    /// Sampling an existing element for its extent.
    Measuring,
    /// Ready to render; re-entered after every recompute.
    Ready,
    /// Torn down; every operation is a no-op.
    Destroyed,
}

/// Holds the per-item extent used by all range and spacer math.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtentEstimator {
    extent: f64,
    measured: bool,
    phase: Lifecycle,
}

impl ExtentEstimator {
    /// Create an estimator from a configured default.
    ///
    /// The default must be finite and positive; configs are validated before
    /// they reach this point.
    pub fn new(default_extent: f64) -> Self {
        debug_assert!(
            default_extent.is_finite() && default_extent > 0.0,
            "default extent must be positive"
        );
        Self {
            extent: default_extent,
            measured: false,
            phase: Lifecycle::Uninitialized,
        }
    }

    /// The current per-item extent. Always positive.
    #[inline]
    pub const fn extent(&self) -> f64 {
        self.extent
    }

    /// Whether the extent came from a measurement rather than the default.
    #[inline]
    pub const fn is_measured(&self) -> bool {
        self.measured
    }

    /// Current lifecycle phase.
    #[inline]
    pub const fn phase(&self) -> Lifecycle {
        self.phase
    }

    /// Run the one-time measurement step.
    ///
    /// `sample` is the extent of an already-rendered element, if the target
    /// has one. Zero, negative and non-finite samples are ignored and the
    /// default is kept. Calls after the first are ignored.
    pub fn measure(&mut self, sample: Option<f64>) -> f64 {
        if self.phase != Lifecycle::Uninitialized {
            return self.extent;
        }
        self.phase = Lifecycle::Measuring;
        match sample {
            Some(value) if value.is_finite() && value > 0.0 => {
                vdebug!(extent = value, "adopted measured item extent");
                self.extent = value;
                self.measured = true;
            }
            Some(value) => {
                vwarn!(sample = value, default = self.extent, "rejected item measurement");
            }
            None => {}
        }
        self.phase = Lifecycle::Ready;
        self.extent
    }

    /// Mark the owner as ready again after a recompute.
    pub(crate) fn mark_ready(&mut self) {
        if self.phase != Lifecycle::Destroyed {
            self.phase = Lifecycle::Ready;
        }
    }

    /// Mark the owner as destroyed.
    pub(crate) fn mark_destroyed(&mut self) {
        self.phase = Lifecycle::Destroyed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kept_without_sample() {
        let mut est = ExtentEstimator::new(50.0);
        assert_eq!(est.phase(), Lifecycle::Uninitialized);
        assert!((est.measure(None) - 50.0).abs() < f64::EPSILON);
        assert!(!est.is_measured());
        assert_eq!(est.phase(), Lifecycle::Ready);
    }

    #[test]
    fn test_sample_adopted_once() {
        let mut est = ExtentEstimator::new(50.0);
        assert!((est.measure(Some(32.0)) - 32.0).abs() < f64::EPSILON);
        assert!(est.is_measured());

        // Never re-measured.
        assert!((est.measure(Some(99.0)) - 32.0).abs() < f64::EPSILON);
        assert!((est.extent() - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bad_samples_rejected() {
        for sample in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let mut est = ExtentEstimator::new(20.0);
            est.measure(Some(sample));
            assert!((est.extent() - 20.0).abs() < f64::EPSILON);
            assert!(!est.is_measured());
        }
    }

    #[test]
    fn test_destroyed_is_terminal() {
        let mut est = ExtentEstimator::new(1.0);
        est.measure(None);
        est.mark_destroyed();
        est.mark_ready();
        assert_eq!(est.phase(), Lifecycle::Destroyed);
    }
}
