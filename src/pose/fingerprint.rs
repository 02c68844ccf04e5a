use crate::{
    foundation::math::Fnv1a64,
    pose::composer::Pose,
    render::sink::DrawItem,
    rig::model::Primitive,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// 128-bit digest of a composed pose, from two independently seeded FNV-1a streams.
pub struct PoseFingerprint {
    /// First stream.
    pub hi: u64,
    /// Second stream.
    pub lo: u64,
}

impl std::fmt::Display for PoseFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Digest of every part id, primitive, color and world matrix in `pose`.
///
/// Floats are hashed by bit pattern, so two poses share a fingerprint only
/// when they are bit-identical.
pub fn fingerprint_pose(pose: &Pose) -> PoseFingerprint {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    write_u64_pair(&mut a, &mut b, pose.phase.to_bits());
    write_u64_pair(&mut a, &mut b, pose.parts.len() as u64);
    for item in &pose.parts {
        write_item_pair(&mut a, &mut b, item);
    }

    PoseFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_item_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, item: &DrawItem) {
    write_str_pair(a, b, &item.part);
    write_u8_pair(
        a,
        b,
        match item.primitive {
            Primitive::Sphere { .. } => 0,
            Primitive::Cylinder { .. } => 1,
            Primitive::Cone { .. } => 2,
            Primitive::Cube { .. } => 3,
            Primitive::Pyramid { .. } => 4,
        },
    );
    let dims = item.primitive.dimensions();
    write_u64_pair(a, b, dims.len() as u64);
    for d in dims {
        write_u64_pair(a, b, d.to_bits());
    }
    for c in item.color.to_array() {
        write_u64_pair(a, b, u64::from(c.to_bits()));
    }
    for m in item.transform.to_cols_array() {
        write_u64_pair(a, b, m.to_bits());
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/pose/fingerprint.rs"]
mod tests;
