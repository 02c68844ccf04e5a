use std::{collections::HashMap, path::Path};

use crate::{
    animation::driver::{JointDriver, validate_axis},
    foundation::core::{DVec3, Rgb, validate_finite3},
    foundation::error::{ArticulateError, ArticulateResult},
    transform::Transform,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An articulated figure described as an ordered table of body parts.
///
/// The table is pure data. It can be:
/// - built programmatically (see [`Rig::doduo`])
/// - serialized/deserialized via Serde (JSON)
///
/// Part order is both the traversal order and the draw order. Every part
/// must be listed after its parent.
pub struct Rig {
    /// Rig name for authoring/debugging.
    pub name: String,
    /// Body parts in parent-before-child order.
    pub parts: Vec<BodyPart>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One rigid node of the figure.
pub struct BodyPart {
    /// Stable identifier, unique within the rig.
    pub id: String,
    /// Identifier of the parent part; `None` only for the root.
    #[serde(default)]
    pub parent: Option<String>,
    /// Phase-driven joint motion relative to the parent.
    #[serde(default)]
    pub joint: JointDriver,
    /// Whether the joint applies before or after the static offset.
    #[serde(default)]
    pub joint_placement: JointPlacement,
    /// Constant resting placement relative to the parent.
    #[serde(default)]
    pub offset: LocalOffset,
    /// What the renderer draws at this part.
    pub render: RenderDescriptor,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Where the joint transform sits in a part's local chain.
pub enum JointPlacement {
    /// `parent * joint * offset`.
    #[default]
    Pre,
    /// `parent * offset * joint`.
    Post,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Rotation of `angle_deg` degrees about `axis`.
pub struct AxisAngle {
    /// Angle in degrees.
    pub angle_deg: f64,
    /// Rotation axis; need not be unit length.
    pub axis: [f64; 3],
}

impl AxisAngle {
    /// Rotation of `angle_deg` about `axis`.
    pub const fn new(angle_deg: f64, axis: [f64; 3]) -> Self {
        Self { angle_deg, axis }
    }

    /// The rotation as a transform.
    pub fn to_transform(self) -> Transform {
        Transform::rotation(self.angle_deg, DVec3::from_array(self.axis))
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Static placement `T(translate) * R(rotations[0]) * R(rotations[1]) * ... * S(scale)`.
pub struct LocalOffset {
    /// Translation, applied last.
    #[serde(default)]
    pub translate: [f64; 3],
    /// Rotations in multiplication order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rotations: Vec<AxisAngle>,
    /// Optional scale, applied first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f64; 3]>,
}

impl LocalOffset {
    /// Pure translation.
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            translate: [x, y, z],
            ..Self::default()
        }
    }

    /// Append a rotation applied after the ones already listed.
    pub fn rotated(mut self, angle_deg: f64, axis: [f64; 3]) -> Self {
        self.rotations.push(AxisAngle::new(angle_deg, axis));
        self
    }

    /// Set the scale.
    pub fn scaled(mut self, scale: [f64; 3]) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Resolve to `T * R1 * R2 * ... * S`.
    pub fn to_transform(&self) -> Transform {
        let mut t = Transform::translation(DVec3::from_array(self.translate));
        for r in &self.rotations {
            t = t * r.to_transform();
        }
        if let Some(s) = self.scale {
            t = t * Transform::scale(DVec3::from_array(s));
        }
        t
    }

    fn validate(&self, field: &str) -> ArticulateResult<()> {
        validate_finite3(self.translate, &format!("{field}.translate"))?;
        for (i, r) in self.rotations.iter().enumerate() {
            if !r.angle_deg.is_finite() {
                return Err(ArticulateError::validation(format!(
                    "{field}.rotations[{i}].angle_deg must be finite"
                )));
            }
            validate_axis(r.axis, &format!("{field}.rotations[{i}].axis"))?;
        }
        if let Some(s) = self.scale {
            validate_finite3(s, &format!("{field}.scale"))?;
            if s.contains(&0.0) {
                return Err(ArticulateError::validation(format!(
                    "{field}.scale components must be non-zero"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Solid primitive drawn at a part, centered on its local origin.
pub enum Primitive {
    /// Sphere around the origin.
    Sphere {
        /// Radius.
        radius: f64,
    },
    /// Along local Y, spanning `[-height/2, height/2]`.
    Cylinder {
        /// Length along Y.
        height: f64,
        /// Radius of both caps.
        radius: f64,
    },
    /// Base at `-height/2`, apex at `+height/2`.
    Cone {
        /// Base to apex distance.
        height: f64,
        /// Base radius.
        radius: f64,
    },
    /// Axis-aligned box with full extents `size`.
    Cube {
        /// Full extents along X, Y and Z.
        size: [f64; 3],
    },
    /// Triangular base `(-width,0,0) (width,0,0) (0,0,breadth)`, apex `(0,height,0)`.
    Pyramid {
        /// Apex height above the base.
        height: f64,
        /// Half width of the base edge along X.
        width: f64,
        /// Depth of the base along Z.
        breadth: f64,
    },
}

impl Primitive {
    /// Cube with equal extents.
    pub fn cube(size: f64) -> Self {
        Self::Cube { size: [size; 3] }
    }

    /// Serialized tag of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Cylinder { .. } => "cylinder",
            Self::Cone { .. } => "cone",
            Self::Cube { .. } => "cube",
            Self::Pyramid { .. } => "pyramid",
        }
    }

    /// Dimensions in declaration order.
    pub fn dimensions(&self) -> Vec<f64> {
        match *self {
            Self::Sphere { radius } => vec![radius],
            Self::Cylinder { height, radius } | Self::Cone { height, radius } => {
                vec![height, radius]
            }
            Self::Cube { size } => size.to_vec(),
            Self::Pyramid {
                height,
                width,
                breadth,
            } => vec![height, width, breadth],
        }
    }

    fn validate(&self, field: &str) -> ArticulateResult<()> {
        if self.dimensions().iter().all(|d| d.is_finite() && *d > 0.0) {
            Ok(())
        } else {
            Err(ArticulateError::validation(format!(
                "{field} {} dimensions must be finite and > 0",
                self.kind_name()
            )))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Constant primitive + color pair handed to the renderer.
pub struct RenderDescriptor {
    /// Shape and dimensions.
    pub primitive: Primitive,
    /// Flat color.
    pub color: Rgb,
}

impl RenderDescriptor {
    /// Pair a primitive with its color.
    pub fn new(primitive: Primitive, color: Rgb) -> Self {
        Self { primitive, color }
    }
}

impl BodyPart {
    /// Parentless part with identity joint and offset.
    pub fn root(id: impl Into<String>, render: RenderDescriptor) -> Self {
        Self {
            id: id.into(),
            parent: None,
            joint: JointDriver::Identity,
            joint_placement: JointPlacement::Pre,
            offset: LocalOffset::default(),
            render,
        }
    }

    /// Part under `parent` with identity joint and offset.
    pub fn child(
        id: impl Into<String>,
        parent: impl Into<String>,
        render: RenderDescriptor,
    ) -> Self {
        Self {
            parent: Some(parent.into()),
            ..Self::root(id, render)
        }
    }

    /// Set the joint driver and where it sits in the local chain.
    pub fn with_joint(mut self, joint: JointDriver, placement: JointPlacement) -> Self {
        self.joint = joint;
        self.joint_placement = placement;
        self
    }

    /// Set the static offset.
    pub fn with_offset(mut self, offset: LocalOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Local transform relative to the parent at `phase`.
    pub fn local_transform(&self, phase: f64) -> Transform {
        let joint = self.joint.sample(phase);
        let offset = self.offset.to_transform();
        match self.joint_placement {
            JointPlacement::Pre => joint * offset,
            JointPlacement::Post => offset * joint,
        }
    }
}

impl Rig {
    /// Rig from parts in traversal order. Not validated.
    pub fn new(name: impl Into<String>, parts: Vec<BodyPart>) -> Self {
        Self {
            name: name.into(),
            parts,
        }
    }

    /// Part by id.
    pub fn part(&self, id: &str) -> Option<&BodyPart> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Check the table without keeping the parent indices.
    pub fn validate(&self) -> ArticulateResult<()> {
        self.resolve_parents().map(|_| ())
    }

    /// Validate the table and map every part to its parent's index.
    ///
    /// The root maps to `None`; every other index is strictly smaller than
    /// the part's own index.
    pub fn resolve_parents(&self) -> ArticulateResult<Vec<Option<usize>>> {
        if self.parts.is_empty() {
            return Err(ArticulateError::validation("rig must have at least one part"));
        }

        let mut index_of: HashMap<&str, usize> = HashMap::with_capacity(self.parts.len());
        let mut parents = Vec::with_capacity(self.parts.len());

        for (i, part) in self.parts.iter().enumerate() {
            if part.id.trim().is_empty() {
                return Err(ArticulateError::validation(format!(
                    "part #{i} id must be non-empty"
                )));
            }
            let field = format!("part '{}'", part.id);

            let parent = match (&part.parent, i) {
                (None, 0) => None,
                (None, _) => {
                    return Err(ArticulateError::validation(format!(
                        "{field} has no parent; only the first part may be the root"
                    )));
                }
                (Some(_), 0) => {
                    return Err(ArticulateError::validation(format!(
                        "{field} is first and must be the root (no parent)"
                    )));
                }
                (Some(p), _) if *p == part.id => {
                    return Err(ArticulateError::validation(format!(
                        "{field} cannot be its own parent"
                    )));
                }
                (Some(p), _) => match index_of.get(p.as_str()) {
                    Some(&idx) => Some(idx),
                    None if self.parts.iter().any(|q| q.id == *p) => {
                        return Err(ArticulateError::validation(format!(
                            "{field} parent '{p}' must be listed before its children"
                        )));
                    }
                    None => {
                        return Err(ArticulateError::validation(format!(
                            "{field} parent '{p}' does not exist"
                        )));
                    }
                },
            };

            part.joint.validate(&format!("{field} joint"))?;
            part.offset.validate(&format!("{field} offset"))?;
            part.render.primitive.validate(&field)?;
            part.render.color.validate(&format!("{field} color"))?;

            if index_of.insert(part.id.as_str(), i).is_some() {
                return Err(ArticulateError::validation(format!(
                    "{field} id is duplicated"
                )));
            }
            parents.push(parent);
        }

        Ok(parents)
    }

    /// Parse and validate a rig from JSON text.
    pub fn from_json_str(s: &str) -> ArticulateResult<Self> {
        let rig: Self = serde_json::from_str(s)?;
        rig.validate()?;
        Ok(rig)
    }

    /// Read, parse and validate a rig JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ArticulateResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            ArticulateError::io(format!("read rig '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ArticulateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/model.rs"]
mod tests;
