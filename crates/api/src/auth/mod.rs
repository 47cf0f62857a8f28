//! Authentication primitives.
//!
//! Only credential *validation* lives here -- issuance (login, refresh,
//! sessions) is handled by an external service that shares the signing
//! secret.

pub mod jwt;
