//! Downloads Use Case
//!
//! Records download events and serves per-product counts. A download of a
//! nonexistent product is rejected rather than recorded as a dangling row.

use std::sync::Arc;

use chrono::{Duration, Utc};
use kernel::id::ProductId;

use crate::application::sales::WINDOW_DAYS;
use crate::domain::entity::Download;
use crate::domain::repository::{DownloadRepository, ProductRepository};
use crate::error::{MarketplaceError, MarketplaceResult};

/// Record input
pub struct RecordDownloadInput {
    pub product_id: ProductId,
}

/// Downloads use case
pub struct DownloadsUseCase<P, D>
where
    P: ProductRepository,
    D: DownloadRepository,
{
    products: Arc<P>,
    downloads: Arc<D>,
}

impl<P, D> DownloadsUseCase<P, D>
where
    P: ProductRepository + Sync,
    D: DownloadRepository + Sync,
{
    pub fn new(products: Arc<P>, downloads: Arc<D>) -> Self {
        Self { products, downloads }
    }

    pub async fn record(&self, input: RecordDownloadInput) -> MarketplaceResult<Download> {
        let product = self
            .products
            .find_by_id(&input.product_id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found("Product"))?;

        let download = Download::new(product.product_id);
        self.downloads.create(&download).await?;

        tracing::info!(product_id = %product.product_id, "Download recorded");

        Ok(download)
    }

    /// Download count for one product over the trailing 30 days
    pub async fn count(&self, product_id: ProductId) -> MarketplaceResult<i64> {
        let since = Utc::now() - Duration::days(WINDOW_DAYS);
        self.downloads.count_for_product_since(&product_id, since).await
    }
}
