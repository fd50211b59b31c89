//! Per-entity animation controller.
//!
//! `EntityAnimator` owns an entity's transform state and at most one
//! [`AnimationSession`], and is driven cooperatively: an external per-frame
//! driver calls [`EntityAnimator::tick`] with that frame's elapsed time.
//! There is no internal threading and `tick` never blocks; starting a new
//! animation synchronously supersedes the previous one, so a tick observes
//! either the old session fully or the new one fully, never a mixture.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationKind, AnimationSession, AnimationStatus, SessionHandle};
use crate::error::InvalidParameter;
use crate::vector::{Axis, Vec3};

/// Runaway-integration bound: if any position axis leaves ±2000 units the
/// position is reset to the origin. A safety clamp, not a physical law.
pub const POSITION_LIMIT: f64 = 2000.0;

/// Position, Euler rotation, and scale of one entity, each a [`Vec3`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl fmt::Display for Transform {
    /// Info-panel layout with integer-truncated components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = |v: Vec3| format!("({}, {}, {})", v.x as i64, v.y as i64, v.z as i64);
        write!(
            f,
            "Position {}\nRotation {}\nScale    {}",
            line(self.position),
            line(self.rotation),
            line(self.scale)
        )
    }
}

/// The set of axes a running animation touches.
///
/// An axis is active iff the session's requested delta is non-zero on it.
/// Empty whenever no session is running, so visualizers can poll this every
/// frame to decide what to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisSet {
    x: bool,
    y: bool,
    z: bool,
}

impl AxisSet {
    pub const EMPTY: Self = Self {
        x: false,
        y: false,
        z: false,
    };

    /// Axes with a non-zero component in `delta`.
    pub fn from_delta(delta: Vec3) -> Self {
        Self {
            x: delta.x != 0.0,
            y: delta.y != 0.0,
            z: delta.z != 0.0,
        }
    }

    pub fn contains(self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn is_empty(self) -> bool {
        !(self.x || self.y || self.z)
    }

    /// The contained axes in component order.
    pub fn axes(self) -> impl Iterator<Item = Axis> {
        Axis::ALL.into_iter().filter(move |axis| self.contains(*axis))
    }
}

/// Per-entity controller: one transform, zero-or-one active session.
#[derive(Debug, Clone, Default)]
pub struct EntityAnimator {
    transform: Transform,
    session: Option<AnimationSession>,
    // Bumped on every start; stale handles from superseded sessions compare
    // unequal and can be ignored by late callers.
    generation: u64,
}

impl EntityAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animator for an entity that starts at the given transform.
    pub fn with_transform(transform: Transform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    /// Read-only snapshot of the entity's current transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Current session, if one was ever started and not yet superseded.
    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    /// Status of the current session, `None` if none exists.
    pub fn status(&self) -> Option<AnimationStatus> {
        self.session.as_ref().map(|s| s.status)
    }

    /// True when no session is running (never started, completed, or
    /// cancelled).
    pub fn is_idle(&self) -> bool {
        self.status() != Some(AnimationStatus::Running)
    }

    /// True if `handle` belongs to a superseded session.
    pub fn is_stale(&self, handle: SessionHandle) -> bool {
        handle.generation != self.generation
    }

    /// Start an animation, superseding any running session.
    ///
    /// The superseded session's partial progress stays on the transform (no
    /// rollback). A bounded kind with `duration <= 0` snaps straight to its
    /// target and reports `Completed`.
    ///
    /// # Errors
    /// Returns [`InvalidParameter`] for non-finite parameters; the animator
    /// is left exactly as it was, including any running session.
    pub fn start(&mut self, kind: AnimationKind) -> Result<SessionHandle, InvalidParameter> {
        kind.validate()?;

        if let Some(session) = self.session.as_mut() {
            if session.status == AnimationStatus::Running {
                session.status = AnimationStatus::Cancelled;
                tracing::debug!(superseded = ?session.kind, "superseding running animation");
            }
        }
        self.generation += 1;

        let start_value = match kind {
            AnimationKind::ForceIntegration { .. } | AnimationKind::TranslationTween { .. } => {
                self.transform.position
            }
            AnimationKind::ScaleTween { .. } => self.transform.scale,
            AnimationKind::RotationTween { .. } => self.transform.rotation,
        };
        let target_value = match kind {
            AnimationKind::ForceIntegration { .. } => start_value,
            AnimationKind::ScaleTween { target_delta, .. } => {
                // Zero axis: keep current scale. Non-zero axis: absolute target.
                let pick = |delta: f64, current: f64| if delta == 0.0 { current } else { delta };
                Vec3::new(
                    pick(target_delta.x, start_value.x),
                    pick(target_delta.y, start_value.y),
                    pick(target_delta.z, start_value.z),
                )
            }
            AnimationKind::RotationTween { target_delta, .. }
            | AnimationKind::TranslationTween { target_delta, .. } => start_value + target_delta,
        };

        let mut session = AnimationSession {
            kind,
            start_value,
            target_value,
            elapsed: 0.0,
            status: AnimationStatus::Running,
        };

        if kind.duration().is_some_and(|d| d <= 0.0) {
            // Degenerate duration: already complete, snap now.
            match kind {
                AnimationKind::ScaleTween { .. } => self.transform.scale = target_value,
                AnimationKind::RotationTween { .. } => self.transform.rotation = target_value,
                AnimationKind::TranslationTween { .. } => self.transform.position = target_value,
                AnimationKind::ForceIntegration { .. } => {}
            }
            session.status = AnimationStatus::Completed;
        }

        tracing::debug!(?kind, generation = self.generation, "starting animation");
        self.session = Some(session);
        Ok(SessionHandle {
            generation: self.generation,
        })
    }

    /// Advance the running session by `dt` seconds.
    ///
    /// Negative `dt` is treated as zero (the driver is assumed monotonic;
    /// retroactive ticks are not supported). No effect unless a session is
    /// running.
    pub fn tick(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.status != AnimationStatus::Running {
            return;
        }

        match session.kind {
            AnimationKind::ForceIntegration { acceleration } => {
                let next = self.transform.position + acceleration.scale(dt);
                if next.x.abs() > POSITION_LIMIT
                    || next.y.abs() > POSITION_LIMIT
                    || next.z.abs() > POSITION_LIMIT
                {
                    tracing::warn!(position = %next, "position left the ±{POSITION_LIMIT} bound, resetting to origin");
                    self.transform.position = Vec3::ZERO;
                } else {
                    self.transform.position = next;
                }
            }
            AnimationKind::ScaleTween { duration, .. } => {
                Self::advance(session, &mut self.transform.scale, duration, dt);
            }
            AnimationKind::RotationTween { duration, .. } => {
                Self::advance(session, &mut self.transform.rotation, duration, dt);
            }
            AnimationKind::TranslationTween { duration, .. } => {
                Self::advance(session, &mut self.transform.position, duration, dt);
            }
        }
    }

    /// Step one bounded session: lerp while short of the duration, then snap
    /// exactly to the target so floating rounding never leaves an
    /// almost-there value.
    fn advance(session: &mut AnimationSession, value: &mut Vec3, duration: f64, dt: f64) {
        session.elapsed += dt;
        if session.elapsed >= duration {
            *value = session.target_value;
            session.status = AnimationStatus::Completed;
            tracing::debug!(kind = ?session.kind, "animation completed");
        } else {
            *value = Vec3::lerp(
                session.start_value,
                session.target_value,
                session.elapsed / duration,
            );
        }
    }

    /// Stop the running session, leaving the transform at its last ticked
    /// value. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.status == AnimationStatus::Running {
                session.status = AnimationStatus::Cancelled;
                tracing::debug!(kind = ?session.kind, "animation cancelled");
            }
        }
    }

    /// Axes the running session touches; empty when idle.
    pub fn active_axes(&self) -> AxisSet {
        match &self.session {
            Some(s) if s.status == AnimationStatus::Running => {
                AxisSet::from_delta(s.kind.requested_delta())
            }
            _ => AxisSet::EMPTY,
        }
    }

    /// Raw requested delta of the running session, for visualizers that need
    /// per-axis direction signs. `None` when idle.
    pub fn requested_delta(&self) -> Option<Vec3> {
        match &self.session {
            Some(s) if s.status == AnimationStatus::Running => Some(s.kind.requested_delta()),
            _ => None,
        }
    }
}
