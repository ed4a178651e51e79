//! Application Layer
//!
//! Use cases and application services.

pub mod downloads;
pub mod products;
pub mod profile;
pub mod sales;

// Re-exports
pub use downloads::{DownloadsUseCase, RecordDownloadInput};
pub use products::{CreateProductInput, ProductsUseCase, UpdateProductInput};
pub use profile::{ProfileUseCase, UpdateProfileInput};
pub use sales::{DailySalesBucket, SalesTotals, SalesUseCase, WINDOW_DAYS};
