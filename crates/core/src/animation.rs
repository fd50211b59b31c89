//! Animation session types: what is being animated, toward what, and how far
//! along it is.

use serde::{Deserialize, Serialize};

use crate::error::InvalidParameter;
use crate::vector::Vec3;

/// One kind of timed transform request.
///
/// `ForceIntegration` is unbounded (runs until cancelled or superseded); the
/// three tweens are bounded by `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimationKind {
    /// Advance position by `acceleration * Δt` every tick, indefinitely.
    ForceIntegration { acceleration: Vec3 },
    /// Tween the scale. A zero axis in `target_delta` keeps the current scale
    /// on that axis; a non-zero axis is the absolute target for that axis.
    ScaleTween { target_delta: Vec3, duration: f64 },
    /// Tween the Euler rotation toward current + `target_delta`.
    RotationTween { target_delta: Vec3, duration: f64 },
    /// Tween the position toward current + `target_delta`.
    TranslationTween { target_delta: Vec3, duration: f64 },
}

impl AnimationKind {
    /// Force integration with the acceleration pre-multiplied by `mass`.
    pub fn force(acceleration: Vec3, mass: f64) -> Self {
        Self::ForceIntegration {
            acceleration: acceleration.scale(mass),
        }
    }

    /// Duration for bounded kinds, `None` for `ForceIntegration`.
    pub fn duration(&self) -> Option<f64> {
        match self {
            Self::ForceIntegration { .. } => None,
            Self::ScaleTween { duration, .. }
            | Self::RotationTween { duration, .. }
            | Self::TranslationTween { duration, .. } => Some(*duration),
        }
    }

    /// True for kinds that complete on their own after `duration`.
    pub fn is_bounded(&self) -> bool {
        self.duration().is_some()
    }

    /// The raw per-axis delta this kind was requested with.
    ///
    /// Axes with a non-zero component here are the "active" axes external
    /// visualizers draw; the sign of each component is the draw direction.
    pub fn requested_delta(&self) -> Vec3 {
        match self {
            Self::ForceIntegration { acceleration } => *acceleration,
            Self::ScaleTween { target_delta, .. }
            | Self::RotationTween { target_delta, .. }
            | Self::TranslationTween { target_delta, .. } => *target_delta,
        }
    }

    /// Reject non-finite parameters before any state is touched.
    ///
    /// # Errors
    /// Returns [`InvalidParameter`] naming the offending field. A
    /// non-positive duration is NOT an error; the animator treats it as an
    /// already-completed tween.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        let delta = self.requested_delta();
        let name = match self {
            Self::ForceIntegration { .. } => ["acceleration.x", "acceleration.y", "acceleration.z"],
            _ => ["target_delta.x", "target_delta.y", "target_delta.z"],
        };
        InvalidParameter::check(name[0], delta.x)?;
        InvalidParameter::check(name[1], delta.y)?;
        InvalidParameter::check(name[2], delta.z)?;
        if let Some(duration) = self.duration() {
            InvalidParameter::check("duration", duration)?;
        }
        Ok(())
    }
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationStatus {
    Running,
    /// Bounded session reached its duration and the transform was snapped to
    /// the exact target.
    Completed,
    /// Stopped by `cancel` or superseded by a newer `start`; the transform
    /// stays at its last ticked value.
    Cancelled,
}

/// One in-flight timed transform for a single entity.
///
/// Owned exclusively by an `EntityAnimator`: created by `start`, mutated only
/// by `tick`/`cancel`, replaced when superseded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSession {
    pub kind: AnimationKind,
    /// Snapshot of the animated transform component when the session started.
    pub start_value: Vec3,
    /// Exact end value for bounded kinds (equal to `start_value` for
    /// `ForceIntegration`, which has no target).
    pub target_value: Vec3,
    /// Accumulated tick time in seconds.
    pub elapsed: f64,
    pub status: AnimationStatus,
}

impl AnimationSession {
    /// Fraction of the duration consumed so far, for bounded kinds.
    pub fn progress(&self) -> Option<f64> {
        self.kind.duration().map(|d| self.elapsed / d)
    }
}

/// Handle identifying one started session.
///
/// Bound to the animator's generation counter at `start` time; once the
/// session is superseded the handle goes stale, so late callers can detect
/// and ignore outcomes that no longer apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle {
    pub(crate) generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_premultiplies_mass() {
        let kind = AnimationKind::force(Vec3::new(1.0, -2.0, 0.5), 4.0);
        assert_eq!(
            kind,
            AnimationKind::ForceIntegration {
                acceleration: Vec3::new(4.0, -8.0, 2.0)
            }
        );
        assert!(!kind.is_bounded());
    }

    #[test]
    fn test_bounded_kinds_report_duration() {
        let kind = AnimationKind::TranslationTween {
            target_delta: Vec3::X,
            duration: 2.0,
        };
        assert_eq!(kind.duration(), Some(2.0));
        assert!(kind.is_bounded());
    }

    #[test]
    fn test_validate_names_the_bad_field() {
        let kind = AnimationKind::RotationTween {
            target_delta: Vec3::new(0.0, f64::NAN, 0.0),
            duration: 1.0,
        };
        let err = kind.validate().unwrap_err();
        assert_eq!(err.name, "target_delta.y");

        let kind = AnimationKind::ScaleTween {
            target_delta: Vec3::X,
            duration: f64::INFINITY,
        };
        assert_eq!(kind.validate().unwrap_err().name, "duration");

        let kind = AnimationKind::ForceIntegration {
            acceleration: Vec3::new(f64::NEG_INFINITY, 0.0, 0.0),
        };
        assert_eq!(kind.validate().unwrap_err().name, "acceleration.x");
    }

    #[test]
    fn test_non_positive_duration_is_valid() {
        let kind = AnimationKind::ScaleTween {
            target_delta: Vec3::X,
            duration: 0.0,
        };
        assert!(kind.validate().is_ok());
    }
}
