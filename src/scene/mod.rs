pub(crate) mod descriptor;
pub(crate) mod generator;
pub(crate) mod glyphs;
pub(crate) mod palette;
pub(crate) mod state;
