pub(crate) mod catalog;
pub(crate) mod icons;
pub(crate) mod loader;
pub(crate) mod palette;
