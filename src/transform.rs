mod affine;

pub use affine::Transform;
