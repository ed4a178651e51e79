//! Download Event Entity
//!
//! A record of a buyer retrieving a product's image. Download events are
//! the proxy for a sale: the sales report counts them and sums the price
//! of the downloaded product at report time.

use chrono::{DateTime, Utc};
use kernel::id::{DownloadId, ProductId};

/// Download event entity
#[derive(Debug, Clone)]
pub struct Download {
    /// Internal UUID identifier
    pub download_id: DownloadId,
    /// Product that was downloaded
    pub product_id: ProductId,
    /// When the download happened
    pub created_at: DateTime<Utc>,
}

impl Download {
    /// Record a download of `product_id` happening now
    pub fn new(product_id: ProductId) -> Self {
        Self {
            download_id: DownloadId::new(),
            product_id,
            created_at: Utc::now(),
        }
    }
}
