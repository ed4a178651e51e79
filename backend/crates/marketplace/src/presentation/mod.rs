//! Presentation Layer
//!
//! DTOs, HTTP handlers, and router.

pub mod dto;
pub mod handlers;
pub mod router;
