//! Articulate composes the pose of an articulated figure from a single
//! animation phase.
//!
//! A [`Rig`] is an ordered table of body parts. Each part names its parent, a
//! procedural [`JointDriver`], a fixed [`LocalOffset`] and the primitive it is
//! drawn as. Parents are always listed before their children, so one forward
//! pass over the table yields every world transform.
//!
//! # Frame overview
//!
//! 1. **Advance**: an [`AnimationClock`] adds a fixed step to its phase.
//! 2. **Compose**: [`PoseComposer::compose`] turns `phase + view` into a [`Pose`].
//! 3. **Emit**: the pose is handed, parent-first, to a [`RenderSink`].
//!
//! [`MeshSink`] tessellates a pose into one world-space [`Mesh`] which
//! [`write_obj`] can store as Wavefront OBJ. [`Rig::doduo`] builds the
//! two-headed bird the crate ships with.
//!
//! Composition is pure: the same rig, phase and view always give a
//! bit-identical pose (see [`fingerprint_pose`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod animation;
mod foundation;
mod pose;
mod render;
mod rig;

/// Rigid transforms with a column-vector convention.
pub mod transform;

pub use animation::clock::{AnimationClock, ClockSettings, DEFAULT_PHASE_STEP};
pub use animation::driver::{JointDriver, Wave};
pub use foundation::core::{DMat4, DVec3, Rgb};
pub use foundation::error::{ArticulateError, ArticulateResult};
pub use foundation::math::DEFAULT_EPSILON;
pub use pose::composer::{Pose, PoseComposer};
pub use pose::fingerprint::{PoseFingerprint, fingerprint_pose};
pub use render::mesh::{
    MAX_SEGMENTS, MIN_SEGMENTS, Mesh, MeshGroup, MeshSink, TessellationSettings,
};
pub use render::obj::{obj_string, write_obj};
pub use render::sink::{CollectSink, DrawItem, RenderSink, submit_pose};
pub use rig::doduo::{ANKLE_FLEX_DEG, BODY_BOB, HEAD_SWAY_DEG, HIP_SWING_DEG, Side};
pub use rig::model::{
    AxisAngle, BodyPart, JointPlacement, LocalOffset, Primitive, RenderDescriptor, Rig,
};
pub use transform::Transform;
