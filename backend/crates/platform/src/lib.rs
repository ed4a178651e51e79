//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, verification via constant-time comparison)
//! - Cookie management
//! - Media host boundary (image upload, returns a public URL)

pub mod cookie;
pub mod media;
pub mod password;
