//! HTTP Handlers
//!
//! Protected routes resolve the session cookie first and answer 401
//! before touching any repository. Public routes (product reads, download
//! recording) skip the gate entirely.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use auth::{AuthConfig, IdentityClaim, SessionResolver};
use kernel::id::{ProductId, UserId};
use platform::media::MediaHost;

use crate::application::downloads::{DownloadsUseCase, RecordDownloadInput};
use crate::application::products::{CreateProductInput, ProductsUseCase, UpdateProductInput};
use crate::application::profile::{ProfileUseCase, UpdateProfileInput};
use crate::application::sales::SalesUseCase;
use crate::domain::repository::{
    DownloadRepository, ProductRepository, SellerProfileRepository,
};
use crate::error::{MarketplaceError, MarketplaceResult};
use crate::presentation::dto::{
    CreateProductRequest, DailySalesDto, DeleteResponse, DownloadCountQuery,
    DownloadCountResponse, DownloadDto, ProductListResponse, ProductResponse,
    ProfileResponse, RecordDownloadRequest, SalesQuery, SalesTotalsDto,
    UpdateProductRequest, UpdateProfileRequest,
};

/// Shared state for marketplace handlers. One repository type implements
/// all three persistence traits; the media host is behind its own trait.
pub struct MarketplaceAppState<R, M>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository,
    M: MediaHost,
{
    pub repo: Arc<R>,
    pub media: Arc<M>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: Arc is always cloneable, the derive would demand R: Clone.
impl<R, M> Clone for MarketplaceAppState<R, M>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository,
    M: MediaHost,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            media: self.media.clone(),
            config: self.config.clone(),
        }
    }
}

/// Resolve the session cookie or fail 401.
fn require_identity(
    config: &AuthConfig,
    headers: &HeaderMap,
) -> MarketplaceResult<IdentityClaim> {
    SessionResolver::new(config)
        .resolve(headers)
        .ok_or(MarketplaceError::Unauthenticated)
}

/// Sales reports address their subject explicitly; a missing `userId`
/// query param is a client error.
fn require_report_subject(requested: Option<uuid::Uuid>) -> MarketplaceResult<UserId> {
    requested
        .map(UserId::from_uuid)
        .ok_or_else(|| MarketplaceError::Validation("Missing userId".to_string()))
}

// ============================================================================
// Products
// ============================================================================

/// POST /api/products
pub async fn create_product<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    headers: HeaderMap,
    Json(req): Json<CreateProductRequest>,
) -> MarketplaceResult<impl IntoResponse>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let identity = require_identity(&state.config, &headers)?;

    let use_case = ProductsUseCase::new(state.repo.clone(), state.media.clone());
    let product = use_case
        .create(
            identity.id,
            CreateProductInput {
                name: req.name,
                description: req.description,
                price: req.price,
                image_data_uri: req.image_base64,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// GET /api/products
///
/// The authenticated caller's own products, newest first.
pub async fn list_products<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    headers: HeaderMap,
) -> MarketplaceResult<Json<ProductListResponse>>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let identity = require_identity(&state.config, &headers)?;

    let use_case = ProductsUseCase::new(state.repo.clone(), state.media.clone());
    let products = use_case.list(identity.id).await?;

    Ok(Json(ProductListResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/products/{id}
pub async fn get_product<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    Path(product_id): Path<uuid::Uuid>,
) -> MarketplaceResult<Json<ProductResponse>>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let use_case = ProductsUseCase::new(state.repo.clone(), state.media.clone());
    let product = use_case.get(ProductId::from_uuid(product_id)).await?;

    Ok(Json(ProductResponse::from(product)))
}

/// PATCH /api/products/{id}
pub async fn update_product<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    Path(product_id): Path<uuid::Uuid>,
    headers: HeaderMap,
    Json(req): Json<UpdateProductRequest>,
) -> MarketplaceResult<Json<ProductResponse>>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let identity = require_identity(&state.config, &headers)?;

    let use_case = ProductsUseCase::new(state.repo.clone(), state.media.clone());
    let product = use_case
        .update(
            identity.id,
            ProductId::from_uuid(product_id),
            UpdateProductInput {
                name: req.name,
                description: req.description,
                price: req.price,
                image_data_uri: req.image_base64,
            },
        )
        .await?;

    Ok(Json(ProductResponse::from(product)))
}

/// DELETE /api/products/{id}
pub async fn delete_product<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    Path(product_id): Path<uuid::Uuid>,
    headers: HeaderMap,
) -> MarketplaceResult<Json<DeleteResponse>>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let identity = require_identity(&state.config, &headers)?;

    let use_case = ProductsUseCase::new(state.repo.clone(), state.media.clone());
    use_case
        .delete(identity.id, ProductId::from_uuid(product_id))
        .await?;

    Ok(Json(DeleteResponse { success: true }))
}

// ============================================================================
// Downloads
// ============================================================================

/// POST /api/downloads
pub async fn record_download<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    Json(req): Json<RecordDownloadRequest>,
) -> MarketplaceResult<impl IntoResponse>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let product_id = req
        .product_id
        .ok_or_else(|| MarketplaceError::Validation("Missing productId".to_string()))?;

    let use_case = DownloadsUseCase::new(state.repo.clone(), state.repo.clone());
    let download = use_case
        .record(RecordDownloadInput {
            product_id: ProductId::from_uuid(product_id),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(DownloadDto::from(download))))
}

/// GET /api/downloads/count
pub async fn download_count<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    Query(query): Query<DownloadCountQuery>,
) -> MarketplaceResult<Json<DownloadCountResponse>>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let product_id = query
        .product_id
        .ok_or_else(|| MarketplaceError::Validation("Missing productId".to_string()))?;

    let use_case = DownloadsUseCase::new(state.repo.clone(), state.repo.clone());
    let count = use_case.count(ProductId::from_uuid(product_id)).await?;

    Ok(Json(DownloadCountResponse { count }))
}

// ============================================================================
// Sales
// ============================================================================

/// GET /api/sales
pub async fn sales_totals<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    Query(query): Query<SalesQuery>,
) -> MarketplaceResult<Json<SalesTotalsDto>>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let seller = require_report_subject(query.user_id)?;

    let use_case = SalesUseCase::new(state.repo.clone(), state.repo.clone());
    let totals = use_case.totals(seller).await?;

    Ok(Json(SalesTotalsDto::from(totals)))
}

/// GET /api/sales/daily
pub async fn sales_daily<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    Query(query): Query<SalesQuery>,
) -> MarketplaceResult<Json<Vec<DailySalesDto>>>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let seller = require_report_subject(query.user_id)?;

    let use_case = SalesUseCase::new(state.repo.clone(), state.repo.clone());
    let series = use_case.daily_series(seller).await?;

    Ok(Json(series.into_iter().map(DailySalesDto::from).collect()))
}

// ============================================================================
// Seller profile
// ============================================================================

/// GET /api/seller-profile
///
/// 200 with `profile: null` when the row is missing; authentication is
/// still required.
pub async fn get_profile<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    headers: HeaderMap,
) -> MarketplaceResult<Json<ProfileResponse>>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let identity = require_identity(&state.config, &headers)?;

    let use_case = ProfileUseCase::new(state.repo.clone(), state.media.clone());
    let profile = use_case.get(identity.id).await?;

    Ok(Json(ProfileResponse {
        profile: profile.map(Into::into),
    }))
}

/// PATCH /api/seller-profile
pub async fn update_profile<R, M>(
    State(state): State<MarketplaceAppState<R, M>>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileRequest>,
) -> MarketplaceResult<Json<ProfileResponse>>
where
    R: ProductRepository + DownloadRepository + SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    let identity = require_identity(&state.config, &headers)?;

    let use_case = ProfileUseCase::new(state.repo.clone(), state.media.clone());
    let profile = use_case
        .update(
            identity.id,
            UpdateProfileInput {
                bio: req.bio,
                story: req.story,
                profile_pic_data_uri: req.profile_pic_base64,
            },
        )
        .await?;

    Ok(Json(ProfileResponse {
        profile: Some(profile.into()),
    }))
}
