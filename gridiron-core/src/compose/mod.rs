pub(crate) mod label;
pub(crate) mod layout;
pub(crate) mod wallpaper;
