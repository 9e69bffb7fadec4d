//! Credential handling.
//!
//! There is no token or server-side session: a successful login hands the
//! caller its identity payload, and later requests name the user in the path.

pub mod password;
