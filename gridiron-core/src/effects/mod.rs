pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod outline;
pub(crate) mod transform;
