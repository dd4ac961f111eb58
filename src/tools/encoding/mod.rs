//! Encoding tools: Base64, hash digests and number bases.

pub mod base64;
pub mod hash;
pub mod number_base;
