//! Session issuance, verification, and cookie delivery.
//! Used by: handlers, extract, state.

pub mod claims;
pub mod cookie;
pub mod jar;
pub mod keys;
pub mod sign;
pub mod verify;
