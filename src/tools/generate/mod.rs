//! Random generators: placeholder text, passwords and UUIDs.

pub mod lorem;
pub mod password;
pub mod uuid;
