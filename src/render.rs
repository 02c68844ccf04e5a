pub(crate) mod mesh;
pub(crate) mod obj;
pub(crate) mod sink;
