//! Request/Response DTOs
//!
//! JSON uses camelCase field names. Currency values are carried as
//! `Decimal` all the way through and rounded to 2 decimal places here,
//! at the presentation edge, and nowhere earlier.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::sales::{DailySalesBucket, SalesTotals};
use crate::domain::entity::{Download, Product, SellerProfile};

// ============================================================================
// Products
// ============================================================================

/// POST /products body. Fields are optional at the wire level so a
/// missing one produces our 400, not a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    /// Base64 data URI of the product image
    pub image_base64: Option<String>,
}

/// PATCH /products/{id} body; absent fields stay unchanged
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image_base64: Option<String>,
}

/// Product response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.product_id.into_uuid(),
            user_id: product.user_id.into_uuid(),
            name: product.name,
            description: product.description,
            price: product.price.round_dp(2),
            image_url: product.image_url,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Single-product response envelope
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: ProductDto,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product: ProductDto::from(product),
        }
    }
}

/// Product-list response envelope
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,
}

/// DELETE /products/{id} response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

// ============================================================================
// Downloads
// ============================================================================

/// POST /downloads body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDownloadRequest {
    pub product_id: Option<Uuid>,
}

/// GET /downloads/count query
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadCountQuery {
    pub product_id: Option<Uuid>,
}

/// Download response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadDto {
    pub id: Uuid,
    pub product_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Download> for DownloadDto {
    fn from(download: Download) -> Self {
        Self {
            id: download.download_id.into_uuid(),
            product_id: download.product_id.into_uuid(),
            created_at: download.created_at,
        }
    }
}

/// GET /downloads/count response
#[derive(Debug, Serialize)]
pub struct DownloadCountResponse {
    pub count: i64,
}

// ============================================================================
// Sales
// ============================================================================

/// GET /sales and /sales/daily query
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesQuery {
    pub user_id: Option<Uuid>,
}

/// GET /sales response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotalsDto {
    pub downloads_count: i64,
    pub total_price: Decimal,
}

impl From<SalesTotals> for SalesTotalsDto {
    fn from(totals: SalesTotals) -> Self {
        Self {
            downloads_count: totals.downloads_count,
            total_price: totals.total_price.round_dp(2),
        }
    }
}

/// One entry of the GET /sales/daily response
#[derive(Debug, Serialize)]
pub struct DailySalesDto {
    /// "YYYY-MM-DD"
    pub date: NaiveDate,
    pub downloads: i64,
    pub revenue: Decimal,
}

impl From<DailySalesBucket> for DailySalesDto {
    fn from(bucket: DailySalesBucket) -> Self {
        Self {
            date: bucket.date,
            downloads: bucket.downloads,
            revenue: bucket.revenue.round_dp(2),
        }
    }
}

// ============================================================================
// Seller profile
// ============================================================================

/// PATCH /seller-profile body; absent fields stay unchanged
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub story: Option<String>,
    /// Base64 data URI of the new profile picture
    pub profile_pic_base64: Option<String>,
}

/// Seller profile response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfileDto {
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub story: Option<String>,
    pub profile_pic_url: Option<String>,
}

impl From<SellerProfile> for SellerProfileDto {
    fn from(profile: SellerProfile) -> Self {
        Self {
            user_id: profile.user_id.into_uuid(),
            bio: profile.bio,
            story: profile.story,
            profile_pic_url: profile.profile_pic_url,
        }
    }
}

/// Profile response envelope; `profile` is `null` when the row is missing
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Option<SellerProfileDto>,
}
