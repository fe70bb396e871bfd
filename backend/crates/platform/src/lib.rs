//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) with zeroized cleartext handling
//! - Cookie management
//! - HTTP method override for browser form clients
//! - HTML escaping for the inline views

pub mod cookie;
pub mod html;
pub mod method_override;
pub mod password;
