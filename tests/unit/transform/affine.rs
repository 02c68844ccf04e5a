use super::*;
use crate::foundation::math::DEFAULT_EPSILON;

struct SplitMix(u64);

impl SplitMix {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        ((z >> 11) as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn vec3(&mut self, lo: f64, hi: f64) -> DVec3 {
        DVec3::new(self.range(lo, hi), self.range(lo, hi), self.range(lo, hi))
    }

    fn transform(&mut self) -> Transform {
        let axis = self.vec3(0.1, 1.0);
        Transform::translation(self.vec3(-5.0, 5.0))
            * Transform::rotation(self.range(-180.0, 180.0), axis)
            * Transform::scale(self.vec3(0.5, 2.0))
    }
}

#[test]
fn compose_is_associative() {
    let mut rng = SplitMix(7);
    for _ in 0..32 {
        let (a, b, c) = (rng.transform(), rng.transform(), rng.transform());
        let left = Transform::compose(Transform::compose(a, b), c);
        let right = Transform::compose(a, Transform::compose(b, c));
        assert!(left.approx_eq(right, DEFAULT_EPSILON));
    }
}

#[test]
fn identity_is_neutral_on_both_sides() {
    let mut rng = SplitMix(11);
    for _ in 0..16 {
        let t = rng.transform();
        assert!(Transform::compose(t, Transform::identity()).approx_eq(t, DEFAULT_EPSILON));
        assert!(Transform::compose(Transform::identity(), t).approx_eq(t, DEFAULT_EPSILON));
    }
}

#[test]
fn translations_add_on_the_origin() {
    let v1 = DVec3::new(1.0, -2.0, 0.5);
    let v2 = DVec3::new(-0.25, 4.0, 3.0);
    let p = Transform::compose(Transform::translation(v1), Transform::translation(v2))
        .transform_point(DVec3::ZERO);
    assert!(p.abs_diff_eq(v1 + v2, DEFAULT_EPSILON));
}

#[test]
fn rotation_is_periodic_in_full_turns() {
    for angle in [-90.0, 0.0, 15.0, 30.0, 123.4] {
        let axis = DVec3::new(1.0, 0.0, 1.0);
        let a = Transform::rotation(angle, axis);
        let b = Transform::rotation(angle + 360.0, axis);
        assert!(a.approx_eq(b, DEFAULT_EPSILON));
    }
}

#[test]
fn rotation_normalizes_axis_and_turns_right_handed() {
    let r = Transform::rotation(90.0, DVec3::new(0.0, 0.0, 5.0));
    let p = r.transform_point(DVec3::X);
    assert!(p.abs_diff_eq(DVec3::Y, DEFAULT_EPSILON));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "rotation axis must be non-zero")]
fn rotation_about_zero_axis_is_asserted() {
    let _ = Transform::rotation(10.0, DVec3::ZERO);
}

#[test]
fn composition_applies_right_operand_first() {
    let t = Transform::translation(DVec3::new(1.0, 0.0, 0.0));
    let s = Transform::scale(DVec3::splat(2.0));
    // Scale then translate.
    assert!(
        (t * s)
            .transform_point(DVec3::X)
            .abs_diff_eq(DVec3::new(3.0, 0.0, 0.0), DEFAULT_EPSILON)
    );
    // Translate then scale.
    assert!(
        (s * t)
            .transform_point(DVec3::X)
            .abs_diff_eq(DVec3::new(4.0, 0.0, 0.0), DEFAULT_EPSILON)
    );
}

#[test]
fn serializes_as_sixteen_column_major_numbers() {
    let t = Transform::translation(DVec3::new(1.0, 2.0, 3.0));
    let v: Vec<f64> = serde_json::from_value(serde_json::to_value(t).unwrap()).unwrap();
    assert_eq!(v.len(), 16);
    assert_eq!(&v[12..15], &[1.0, 2.0, 3.0]);
    let back: Transform = serde_json::from_value(serde_json::to_value(t).unwrap()).unwrap();
    assert_eq!(back, t);
}
