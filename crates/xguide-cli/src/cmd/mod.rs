//! Command implementations by domain.

pub mod system;
pub mod template;
