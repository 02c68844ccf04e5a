use super::*;

#[test]
fn doduo_rig_is_valid() {
    let rig = Rig::doduo();
    rig.validate().unwrap();
    assert_eq!(rig.name, "doduo");
}

#[test]
fn doduo_has_expected_part_count() {
    // body + 2 * (pivot, neck, head, 2 beaks, 2 * (eye + 2 shines))
    //      + 2 * (hip, upper, lower, ankle, 3 * (toe + tip))
    assert_eq!(Rig::doduo().parts.len(), 1 + 2 * 11 + 2 * 10);
}

#[test]
fn traversal_order_is_body_then_heads_then_legs() {
    let rig = Rig::doduo();
    let ids: Vec<&str> = rig.parts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids[0], "body");
    assert_eq!(
        &ids[1..12],
        &[
            "neck_pivot_left",
            "neck_left",
            "head_left",
            "beak_upper_left",
            "beak_lower_left",
            "eye_a_left",
            "eye_a_left_shine_large",
            "eye_a_left_shine_small",
            "eye_b_left",
            "eye_b_left_shine_large",
            "eye_b_left_shine_small",
        ]
    );
    assert_eq!(ids[12], "neck_pivot_right");
    assert_eq!(
        &ids[23..33],
        &[
            "hip_left",
            "upper_leg_left",
            "lower_leg_left",
            "ankle_left",
            "toe_inner_left",
            "toe_inner_left_tip",
            "toe_middle_left",
            "toe_middle_left_tip",
            "toe_outer_left",
            "toe_outer_left_tip",
        ]
    );
    assert_eq!(ids[33], "hip_right");
    assert_eq!(*ids.last().unwrap(), "toe_outer_right_tip");
}

#[test]
fn hip_swings_are_mirrored() {
    let rig = Rig::doduo();
    let left = &rig.part("hip_left").unwrap().joint;
    let right = &rig.part("hip_right").unwrap().joint;
    for i in 0..64 {
        let phase = f64::from(i) * 0.15;
        let l = left.angle_deg(phase).unwrap();
        let r = right.angle_deg(phase).unwrap();
        assert_eq!(l, -r);
        assert!(l.abs() <= HIP_SWING_DEG);
    }
}

#[test]
fn ankle_flexes_with_the_hip_swing_sign() {
    let rig = Rig::doduo();
    for side in Side::BOTH {
        let hip = &rig.part(&format!("hip_{}", side.suffix())).unwrap().joint;
        let ankle = rig.part(&format!("ankle_{}", side.suffix())).unwrap();
        assert_eq!(ankle.joint_placement, JointPlacement::Post);
        let phase = 1.0;
        let h = hip.angle_deg(phase).unwrap() / HIP_SWING_DEG;
        let a = ankle.joint.angle_deg(phase).unwrap() / ANKLE_FLEX_DEG;
        assert!((h - a).abs() < 1e-12);
    }
}

#[test]
fn head_sway_is_mirrored_cosine() {
    let rig = Rig::doduo();
    let left = &rig.part("head_left").unwrap().joint;
    let right = &rig.part("head_right").unwrap().joint;
    assert_eq!(left.angle_deg(0.0), Some(HEAD_SWAY_DEG));
    assert_eq!(right.angle_deg(0.0), Some(-HEAD_SWAY_DEG));
}

#[test]
fn legs_and_necks_hang_off_the_body() {
    let rig = Rig::doduo();
    for id in ["neck_pivot_left", "neck_pivot_right", "hip_left", "hip_right"] {
        assert_eq!(rig.part(id).unwrap().parent.as_deref(), Some("body"));
    }
    assert_eq!(
        rig.part("toe_middle_right_tip").unwrap().parent.as_deref(),
        Some("toe_middle_right")
    );
}

#[test]
fn side_signs() {
    assert_eq!(Side::Left.sign(), -1.0);
    assert_eq!(Side::Right.sign(), 1.0);
}
