//! Vector Simulation Core Library
//!
//! 3D vector algebra with human-readable formula rendering, plus a per-entity
//! timed-transform animator driven by an external per-frame tick.
//!
//! The two halves are deliberately separate:
//! - [`vector`] and [`formula`] are pure and stateless: every algebraic
//!   operation returns a new value, and formula rendering only builds display
//!   strings from literal operands.
//! - [`animator`] and [`registry`] hold the per-entity state machine: at most
//!   one [`AnimationSession`] per entity, advanced cooperatively by
//!   [`EntityAnimator::tick`], with synchronous cancellation and
//!   supersession.
//!
//! Presentation concerns (input parsing, line/text rendering, camera
//! following) live outside this crate and consume its read-only snapshots.

pub mod animation;
pub mod animator;
pub mod error;
pub mod formula;
pub mod registry;
pub mod vector;

// Re-export the public surface
pub use animation::{AnimationKind, AnimationSession, AnimationStatus, SessionHandle};
pub use animator::{AxisSet, EntityAnimator, Transform, POSITION_LIMIT};
pub use error::InvalidParameter;
pub use registry::{EntityId, EntityRegistry};
pub use vector::{Axis, Vec3};
