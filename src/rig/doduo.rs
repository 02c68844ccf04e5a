//! Built-in two-headed bird rig.

use crate::{
    animation::driver::{JointDriver, Wave},
    foundation::core::Rgb,
    rig::model::{BodyPart, JointPlacement, LocalOffset, Primitive, RenderDescriptor, Rig},
};

const X: [f64; 3] = [1.0, 0.0, 0.0];
const Z: [f64; 3] = [0.0, 0.0, 1.0];

pub(crate) const PLUMAGE: Rgb = Rgb::new(0.804, 0.522, 0.247);
pub(crate) const NECK: Rgb = Rgb::new(0.212, 0.212, 0.212);
pub(crate) const BEAK: Rgb = Rgb::new(1.0, 0.871, 0.678);
pub(crate) const PUPIL: Rgb = Rgb::new(0.1, 0.1, 0.1);
pub(crate) const SHINE: Rgb = Rgb::new(0.9, 0.9, 0.9);
pub(crate) const CLAW: Rgb = Rgb::new(0.863, 0.863, 0.863);

/// Peak hip swing in degrees.
pub const HIP_SWING_DEG: f64 = 30.0;
/// Peak ankle flex in degrees.
pub const ANKLE_FLEX_DEG: f64 = 25.0;
/// Peak head sway in degrees.
pub const HEAD_SWAY_DEG: f64 = 2.0;
/// Vertical bob amplitude of the body.
pub const BODY_BOB: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Mirror side of a symmetric branch.
pub enum Side {
    /// Negative X side; sign `-1`.
    Left,
    /// Positive X side; sign `+1`.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// `-1` for left, `+1` for right.
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Id suffix: `left` or `right`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

fn named(base: &str, side: Side) -> String {
    format!("{base}_{}", side.suffix())
}

fn sphere(radius: f64, color: Rgb) -> RenderDescriptor {
    RenderDescriptor::new(Primitive::Sphere { radius }, color)
}

fn cylinder(height: f64, radius: f64, color: Rgb) -> RenderDescriptor {
    RenderDescriptor::new(Primitive::Cylinder { height, radius }, color)
}

fn pyramid(height: f64, width: f64, breadth: f64) -> RenderDescriptor {
    RenderDescriptor::new(
        Primitive::Pyramid {
            height,
            width,
            breadth,
        },
        BEAK,
    )
}

impl Rig {
    /// The two-headed, two-legged bird: body, then both neck/head branches,
    /// then both legs.
    pub fn doduo() -> Self {
        let mut parts = vec![
            BodyPart::root("body", sphere(2.5, PLUMAGE))
                .with_joint(JointDriver::bob(BODY_BOB, 2.0), JointPlacement::Pre)
                .with_offset(LocalOffset::at(1.5, 1.85, 0.5)),
        ];
        for side in Side::BOTH {
            head_branch(&mut parts, side);
        }
        for side in Side::BOTH {
            leg_branch(&mut parts, side);
        }
        Rig::new("doduo", parts)
    }
}

fn head_branch(parts: &mut Vec<BodyPart>, side: Side) {
    let s = side.sign();
    let pivot = named("neck_pivot", side);
    let neck = named("neck", side);
    let head = named("head", side);

    parts.push(
        BodyPart::child(&pivot, "body", RenderDescriptor::new(Primitive::cube(0.5), PLUMAGE))
            .with_joint(JointDriver::bob(0.1, 2.0), JointPlacement::Pre)
            .with_offset(LocalOffset::at(-s, 1.75, -1.0).rotated(30.0, [1.0, 0.0, -s])),
    );
    parts.push(
        BodyPart::child(&neck, &pivot, cylinder(4.5, 0.2, NECK))
            .with_offset(LocalOffset::at(0.0, 2.15, 0.0)),
    );
    parts.push(
        BodyPart::child(&head, &neck, sphere(1.25, PLUMAGE))
            .with_joint(
                JointDriver::swing(-s * HEAD_SWAY_DEG, Z, Wave::Cos),
                JointPlacement::Pre,
            )
            .with_offset(LocalOffset::at(s * 0.25, 3.0, 0.0).rotated(-30.0, [1.0, 0.0, -s])),
    );
    parts.push(
        BodyPart::child(named("beak_upper", side), &head, pyramid(3.0, 0.45, 0.35)).with_offset(
            LocalOffset::at(0.0, -0.5, -1.05)
                .rotated(0.0, Z)
                .rotated(90.0, X),
        ),
    );
    parts.push(
        BodyPart::child(named("beak_lower", side), &head, pyramid(2.5, 0.35, 0.25)).with_offset(
            LocalOffset::at(0.0, -0.5, -0.95)
                .rotated(180.0, Z)
                .rotated(90.0, X),
        ),
    );

    for (eye, x) in [("a", 0.5), ("b", -0.5)] {
        let id = format!("eye_{eye}_{}", side.suffix());
        parts.push(
            BodyPart::child(&id, &head, sphere(0.4, PUPIL))
                .with_offset(LocalOffset::at(x, 0.15, -0.95).rotated(90.0, X)),
        );
        parts.push(
            BodyPart::child(format!("{id}_shine_large"), &id, sphere(0.2, SHINE))
                .with_offset(LocalOffset::at(0.05, 0.2, 0.1)),
        );
        parts.push(
            BodyPart::child(format!("{id}_shine_small"), &id, sphere(0.1, SHINE))
                .with_offset(LocalOffset::at(-0.15, 0.275, -0.1)),
        );
    }
}

fn leg_branch(parts: &mut Vec<BodyPart>, side: Side) {
    let s = side.sign();
    let hip = named("hip", side);
    let upper = named("upper_leg", side);
    let lower = named("lower_leg", side);
    let ankle = named("ankle", side);

    // Hip bob rides on the body bob: 0.15 + 0.1 gives the full leg bob.
    parts.push(
        BodyPart::child(&hip, "body", RenderDescriptor::new(Primitive::cube(0.5), PLUMAGE))
            .with_joint(
                JointDriver::chain([
                    JointDriver::swing(s * HIP_SWING_DEG, X, Wave::Sin),
                    JointDriver::bob(0.1, 2.0),
                ]),
                JointPlacement::Pre,
            )
            .with_offset(LocalOffset::at(s * 1.5, -1.85, -0.5).rotated(15.0, X)),
    );
    parts.push(
        BodyPart::child(&upper, &hip, cylinder(3.0, 0.2, BEAK))
            .with_offset(LocalOffset::at(0.0, -1.5, 0.75).rotated(25.0, X)),
    );
    parts.push(
        BodyPart::child(&lower, &upper, cylinder(5.0, 0.225, BEAK))
            .with_offset(LocalOffset::at(0.0, -3.65, -1.0).rotated(-25.0, X)),
    );
    parts.push(
        BodyPart::child(&ankle, &lower, RenderDescriptor::new(Primitive::cube(0.5), BEAK))
            .with_joint(
                JointDriver::swing(s * ANKLE_FLEX_DEG, X, Wave::Sin),
                JointPlacement::Post,
            )
            .with_offset(LocalOffset::at(0.0, -2.5, 0.0).rotated(90.0, X)),
    );

    for (toe, x, fan) in [("inner", -0.5, -30.0), ("middle", 0.0, 0.0), ("outer", 0.5, 30.0)] {
        let id = format!("toe_{toe}_{}", side.suffix());
        parts.push(
            BodyPart::child(&id, &ankle, cylinder(2.0, 0.185, BEAK))
                .with_offset(LocalOffset::at(x, 1.0, 0.0).rotated(fan, Z)),
        );
        parts.push(
            BodyPart::child(
                format!("{id}_tip"),
                &id,
                RenderDescriptor::new(
                    Primitive::Cone {
                        height: 1.0,
                        radius: 0.2,
                    },
                    CLAW,
                ),
            )
            .with_offset(LocalOffset::at(0.0, 1.5, 0.0)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/doduo.rs"]
mod tests;
