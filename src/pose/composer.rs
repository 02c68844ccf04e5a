use crate::{
    foundation::error::{ArticulateError, ArticulateResult},
    render::sink::{DrawItem, RenderSink, submit_pose},
    rig::model::Rig,
    transform::Transform,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// World-space placement of every part of a rig at one phase.
pub struct Pose {
    /// Phase the pose was composed at.
    pub phase: f64,
    /// Draw items in rig (parent-first) order.
    pub parts: Vec<DrawItem>,
}

impl Pose {
    /// Posed part by id.
    pub fn get(&self, id: &str) -> Option<&DrawItem> {
        self.parts.iter().find(|p| p.part == id)
    }

    /// World transform of part `id`, or an evaluation error if it is absent.
    pub fn world(&self, id: &str) -> ArticulateResult<Transform> {
        self.get(id)
            .map(|p| p.transform)
            .ok_or_else(|| ArticulateError::evaluation(format!("pose has no part '{id}'")))
    }

    /// Number of posed parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the pose has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Owns a validated rig and turns a phase into a [`Pose`].
///
/// Composition is stateless: the same phase and view always produce the same
/// pose. The caller owns the clock.
#[derive(Clone, Debug)]
pub struct PoseComposer {
    rig: Rig,
    parents: Vec<Option<usize>>,
}

impl PoseComposer {
    /// Validate `rig` and resolve its parent links once.
    #[tracing::instrument(skip(rig), fields(rig = %rig.name, parts = rig.parts.len()))]
    pub fn new(rig: Rig) -> ArticulateResult<Self> {
        let parents = rig.resolve_parents()?;
        tracing::debug!("rig validated");
        Ok(Self { rig, parents })
    }

    /// The validated rig.
    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    /// Index of each part's parent; `None` for the root.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// World transforms in rig order.
    ///
    /// Root: `view * local(phase)`. Others: `world[parent] * local(phase)`.
    pub fn world_transforms(&self, phase: f64, view: Transform) -> Vec<Transform> {
        let mut world: Vec<Transform> = Vec::with_capacity(self.rig.parts.len());
        for (part, parent) in self.rig.parts.iter().zip(&self.parents) {
            let base = match parent {
                Some(idx) => world[*idx],
                None => view,
            };
            world.push(base * part.local_transform(phase));
        }
        world
    }

    /// Pose every part at `phase`, with `view` applied once at the root.
    #[tracing::instrument(level = "trace", skip(self, view), fields(rig = %self.rig.name))]
    pub fn compose(&self, phase: f64, view: Transform) -> Pose {
        let parts = self
            .rig
            .parts
            .iter()
            .zip(self.world_transforms(phase, view))
            .map(|(part, transform)| DrawItem {
                part: part.id.clone(),
                primitive: part.render.primitive,
                transform,
                color: part.render.color,
            })
            .collect();
        Pose { phase, parts }
    }

    /// Hand a composed pose to `sink` in traversal order.
    pub fn emit<S: RenderSink + ?Sized>(&self, pose: &Pose, sink: &mut S) -> ArticulateResult<()> {
        submit_pose(sink, pose)
    }

    /// Compose at `phase` and emit to `sink`.
    pub fn render_frame<S: RenderSink + ?Sized>(
        &self,
        phase: f64,
        view: Transform,
        sink: &mut S,
    ) -> ArticulateResult<()> {
        let pose = self.compose(phase, view);
        self.emit(&pose, sink)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pose/composer.rs"]
mod tests;
