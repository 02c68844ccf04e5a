use super::*;
use crate::{
    animation::clock::AnimationClock,
    animation::driver::JointDriver,
    foundation::core::DVec3,
    foundation::math::DEFAULT_EPSILON,
    render::sink::CollectSink,
    rig::model::{JointPlacement, LocalOffset},
};

fn doduo() -> PoseComposer {
    PoseComposer::new(Rig::doduo()).unwrap()
}

#[test]
fn compose_is_deterministic() {
    let c = doduo();
    let view = Transform::translation(DVec3::new(0.0, -2.0, -20.0));
    for phase in [0.0, 0.15, 1.0, 42.7] {
        assert_eq!(c.compose(phase, view), c.compose(phase, view));
    }
}

#[test]
fn every_part_follows_the_hierarchy_invariant() {
    let c = doduo();
    let view = Transform::rotation(20.0, DVec3::Y);
    let phase = 2.3;
    let world = c.world_transforms(phase, view);
    for (i, part) in c.rig().parts.iter().enumerate() {
        let base = match c.parents()[i] {
            Some(p) => world[p],
            None => view,
        };
        let joint = part.joint.sample(phase);
        let offset = part.offset.to_transform();
        let expected = match part.joint_placement {
            JointPlacement::Pre => base * joint * offset,
            JointPlacement::Post => base * offset * joint,
        };
        assert!(world[i].approx_eq(expected, DEFAULT_EPSILON), "{}", part.id);
    }
}

#[test]
fn identity_joints_and_offsets_collapse_to_parent() {
    let mut rig = Rig::doduo();
    for part in &mut rig.parts {
        part.joint = JointDriver::Identity;
        part.offset = LocalOffset::default();
    }
    let c = PoseComposer::new(rig).unwrap();
    let view = Transform::translation(DVec3::new(3.0, 4.0, 5.0));
    let world = c.world_transforms(0.9, view);
    for (i, parent) in c.parents().iter().enumerate() {
        let expected = parent.map_or(view, |p| world[p]);
        assert_eq!(world[i], expected);
    }
}

#[test]
fn phase_zero_is_the_rest_pose() {
    let c = doduo();
    let pose = c.compose(0.0, Transform::IDENTITY);
    let body = pose.world("body").unwrap();
    assert!(
        body.translation_part()
            .abs_diff_eq(DVec3::new(1.5, 1.85, 0.5), DEFAULT_EPSILON)
    );
    for id in ["hip_left", "hip_right"] {
        assert_eq!(c.rig().part(id).unwrap().joint.angle_deg(0.0), Some(0.0));
    }
    // Hips rest below the body at x = 0 and x = 3.
    let left = pose.world("hip_left").unwrap().translation_part();
    let right = pose.world("hip_right").unwrap().translation_part();
    assert!(left.abs_diff_eq(DVec3::new(0.0, 0.0, 0.0), DEFAULT_EPSILON));
    assert!(right.abs_diff_eq(DVec3::new(3.0, 0.0, 0.0), DEFAULT_EPSILON));
}

#[test]
fn view_is_applied_at_the_root_only_once() {
    let c = doduo();
    let phase = 0.6;
    let shift = DVec3::new(10.0, 0.0, -5.0);
    let plain = c.compose(phase, Transform::IDENTITY);
    let shifted = c.compose(phase, Transform::translation(shift));
    for (a, b) in plain.parts.iter().zip(&shifted.parts) {
        let moved = b.transform.translation_part() - a.transform.translation_part();
        assert!(moved.abs_diff_eq(shift, DEFAULT_EPSILON), "{}", a.part);
    }
}

#[test]
fn stepped_and_jumped_clocks_give_the_same_pose() {
    let c = doduo();
    let mut stepped = AnimationClock::new();
    for _ in 0..10 {
        stepped.advance(0.15);
    }
    let mut jumped = AnimationClock::new();
    jumped.advance(1.5);

    let a = c.compose(stepped.phase(), Transform::IDENTITY);
    let b = c.compose(jumped.phase(), Transform::IDENTITY);
    for (x, y) in a.parts.iter().zip(&b.parts) {
        assert!(x.transform.approx_eq(y.transform, DEFAULT_EPSILON), "{}", x.part);
    }
    for id in ["hip_left", "hip_right", "ankle_left", "ankle_right"] {
        let j = &c.rig().part(id).unwrap().joint;
        let da = j.angle_deg(stepped.phase()).unwrap();
        let db = j.angle_deg(jumped.phase()).unwrap();
        assert!((da - db).abs() < 1e-9);
    }
}

#[test]
fn legs_move_in_opposition() {
    let c = doduo();
    let phase = std::f64::consts::FRAC_PI_2;
    let pose = c.compose(phase, Transform::IDENTITY);
    let body = pose.world("body").unwrap();
    let tip_z = |id: &str| pose.world(id).unwrap().translation_part().z - body.translation_part().z;
    // One foot swings forward while the other swings back.
    let l = tip_z("ankle_left");
    let r = tip_z("ankle_right");
    assert!(l * r < 0.0, "left {l}, right {r}");
}

#[test]
fn render_frame_emits_every_part_in_order() {
    let c = doduo();
    let mut sink = CollectSink::new();
    c.render_frame(0.45, Transform::IDENTITY, &mut sink).unwrap();
    assert_eq!(sink.frames, 1);
    assert_eq!(sink.items.len(), c.rig().parts.len());
    for (item, part) in sink.items.iter().zip(&c.rig().parts) {
        assert_eq!(item.part, part.id);
        assert_eq!(item.primitive, part.render.primitive);
        assert_eq!(item.color, part.render.color);
    }
}

#[test]
fn invalid_rig_is_rejected_at_construction() {
    let mut rig = Rig::doduo();
    rig.parts.swap(1, 2);
    assert!(matches!(
        PoseComposer::new(rig),
        Err(ArticulateError::Validation(_))
    ));
}

#[test]
fn unknown_part_lookup_is_an_evaluation_error() {
    let pose = doduo().compose(0.0, Transform::IDENTITY);
    assert!(matches!(
        pose.world("tail"),
        Err(ArticulateError::Evaluation(_))
    ));
    assert_eq!(pose.len(), 43);
    assert!(!pose.is_empty());
}

#[test]
fn ankle_world_rotation_follows_the_leg_chain() {
    // Every leg joint turns about X, so the ankle's world rotation is a single
    // X rotation: hip swing + 15 + 25 - 25 + 90 + ankle flex.
    let c = doduo();
    for phase in [0.0, 0.4, 1.0, 2.2, 4.0] {
        let pose = c.compose(phase, Transform::IDENTITY);
        for (id, s) in [("ankle_left", -1.0), ("ankle_right", 1.0)] {
            let angle = 105.0 + s * 55.0 * f64::sin(phase);
            let expected = glam::DMat3::from_mat4(Transform::rotation(angle, DVec3::X).matrix());
            let actual = glam::DMat3::from_mat4(pose.world(id).unwrap().matrix());
            assert!(
                actual.abs_diff_eq(expected, DEFAULT_EPSILON),
                "{id} at {phase}: {actual} vs {expected}"
            );
        }
    }
}
