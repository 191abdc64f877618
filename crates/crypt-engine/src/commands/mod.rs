//! Commands that combine lifecycle operations with host capabilities.

pub mod rename;
pub mod restore;
