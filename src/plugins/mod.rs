//! Plugins for enhancing the default implementation of satview can be defined in this module.

#[cfg(feature = "mathml")]
pub mod mathml;
