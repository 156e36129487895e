//! Modreg Core
//!
//! Core types and codecs for the module registry catalog.
//!
//! This crate contains:
//! - Domain types: modules, versions, inputs/outputs/dependencies
//! - DTOs: request parameters and response envelopes of the registry API
//! - Codec: total JSON decoding and null-stripping encoding

pub mod codec;
pub mod domain;
pub mod dto;
pub mod error;

pub use codec::{Decode, encode};
pub use error::ValidationError;
