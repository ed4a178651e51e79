//! Repository Traits
//!
//! Persistence boundaries for the marketplace. Implementations live in
//! the infra layer; tests swap in in-memory fakes.

use chrono::{DateTime, Utc};
use kernel::id::{ProductId, UserId};
use rust_decimal::Decimal;

use crate::domain::entity::{Download, Product, SellerProfile};
use crate::error::MarketplaceResult;

/// A download joined with the downloaded product's price, the raw row the
/// sales report is folded from.
#[derive(Debug, Clone)]
pub struct SaleRecord {
    /// When the download happened
    pub downloaded_at: DateTime<Utc>,
    /// List price of the product at report time
    pub price: Decimal,
}

/// Product persistence operations
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    async fn create(&self, product: &Product) -> MarketplaceResult<()>;

    async fn find_by_id(&self, product_id: &ProductId) -> MarketplaceResult<Option<Product>>;

    /// A single seller's products, newest first
    async fn list_by_seller(&self, user_id: &UserId) -> MarketplaceResult<Vec<Product>>;

    async fn update(&self, product: &Product) -> MarketplaceResult<()>;

    async fn delete(&self, product_id: &ProductId) -> MarketplaceResult<()>;

    /// Sum of list prices across the seller's whole catalog. Zero when the
    /// seller has no products.
    async fn sum_price_by_seller(&self, user_id: &UserId) -> MarketplaceResult<Decimal>;
}

/// Download event persistence operations
#[trait_variant::make(DownloadRepository: Send)]
pub trait LocalDownloadRepository {
    async fn create(&self, download: &Download) -> MarketplaceResult<()>;

    /// Downloads of one product since `since`
    async fn count_for_product_since(
        &self,
        product_id: &ProductId,
        since: DateTime<Utc>,
    ) -> MarketplaceResult<i64>;

    /// Downloads of the seller's products since `since`
    async fn count_for_seller_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> MarketplaceResult<i64>;

    /// Downloads of the seller's products since `since`, joined with the
    /// product price, for the daily sales fold
    async fn sales_for_seller_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> MarketplaceResult<Vec<SaleRecord>>;
}

/// Seller profile persistence operations
#[trait_variant::make(SellerProfileRepository: Send)]
pub trait LocalSellerProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> MarketplaceResult<Option<SellerProfile>>;

    async fn update(&self, profile: &SellerProfile) -> MarketplaceResult<()>;
}
