//! Data Transfer Objects for the registry API
//!
//! Request parameters sent to the registry and the envelopes its endpoints
//! answer with. Envelopes decode leniently through [`crate::codec`].

pub mod discovery;
pub mod register;
pub mod search;
pub mod source;
pub mod versions;
