//! Marketplace Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Product listings with per-seller ownership: create/read/update/delete,
//!   mutations gated on the owning user id
//! - Download events as the proxy for sales, with per-product counts
//! - Sales reporting: trailing 30-day daily series (zero-filled) and
//!   window totals, recomputed from raw rows on every call
//! - Seller profile (bio, story, picture) editing
//!
//! Protected routes resolve the caller through the auth crate's session
//! cookie; single-product reads, download recording, and the sales
//! reports are public, while the product list is scoped to the
//! authenticated seller.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::sales::{DailySalesBucket, SalesTotals, SalesUseCase};
pub use error::{MarketplaceError, MarketplaceResult};
pub use infra::postgres::PgMarketplaceRepository;
pub use presentation::router::marketplace_router;
