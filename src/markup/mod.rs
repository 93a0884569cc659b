pub(crate) mod node;
pub(crate) mod page;
pub(crate) mod shape;
pub(crate) mod style;
