pub(crate) mod common;
pub(crate) mod entries;
pub(crate) mod integer;
pub(crate) mod keyed;
pub(crate) mod lsd;
pub(crate) mod permute;
pub(crate) mod splice;
