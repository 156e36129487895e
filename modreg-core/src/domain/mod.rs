//! Core domain types
//!
//! Records describing modules as the registry serves them. These are the
//! typed values handed to presentation code.

pub mod module;
pub mod version;
