pub(crate) mod select;
pub(crate) mod shape;
