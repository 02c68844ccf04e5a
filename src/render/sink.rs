use crate::{
    foundation::core::Rgb,
    foundation::error::{ArticulateError, ArticulateResult},
    pose::composer::Pose,
    rig::model::Primitive,
    transform::Transform,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One primitive to draw: what, where and in which color.
pub struct DrawItem {
    /// Identifier of the body part this item belongs to.
    pub part: String,
    /// Primitive kind and dimensions, in part-local space.
    pub primitive: Primitive,
    /// Part-local to view-space transform.
    pub transform: Transform,
    /// Constant straight RGB color.
    pub color: Rgb,
}

/// Consumer of posed draw items.
///
/// Implementations own whatever device or buffer state they need; the
/// composer never touches it. Items arrive parent-first in rig order.
pub trait RenderSink {
    /// Called once before the first item of a frame.
    fn begin_frame(&mut self, _phase: f64) -> ArticulateResult<()> {
        Ok(())
    }

    /// Consume one posed part.
    fn draw(&mut self, item: &DrawItem) -> ArticulateResult<()>;

    /// Called once after the last item of a frame.
    fn end_frame(&mut self) -> ArticulateResult<()> {
        Ok(())
    }
}

/// Hand every item of `pose` to `sink`, framed by begin/end calls.
///
/// The first sink error stops the frame and is returned.
pub fn submit_pose<S: RenderSink + ?Sized>(sink: &mut S, pose: &Pose) -> ArticulateResult<()> {
    sink.begin_frame(pose.phase)?;
    for item in &pose.parts {
        sink.draw(item).map_err(|e| match e {
            ArticulateError::Evaluation(msg) => {
                ArticulateError::evaluation(format!("sink rejected '{}': {msg}", item.part))
            }
            other => other,
        })?;
    }
    sink.end_frame()?;
    tracing::debug!(items = pose.parts.len(), "submitted pose");
    Ok(())
}

#[derive(Clone, Debug, Default)]
/// Sink that records every item it receives.
pub struct CollectSink {
    /// Number of frames begun.
    pub frames: usize,
    /// Every item received, across frames.
    pub items: Vec<DrawItem>,
}

impl CollectSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for CollectSink {
    fn begin_frame(&mut self, _phase: f64) -> ArticulateResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn draw(&mut self, item: &DrawItem) -> ArticulateResult<()> {
        self.items.push(item.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
