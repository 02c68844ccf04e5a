pub(crate) mod doduo;
pub(crate) mod model;
