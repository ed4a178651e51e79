//! Marketplace Router

use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;

use auth::AuthConfig;
use platform::media::{CloudinaryHost, MediaHost};

use crate::domain::repository::{
    DownloadRepository, ProductRepository, SellerProfileRepository,
};
use crate::infra::postgres::PgMarketplaceRepository;
use crate::presentation::handlers::{self, MarketplaceAppState};

/// Create the marketplace router with PostgreSQL repository and Cloudinary
pub fn marketplace_router(
    repo: PgMarketplaceRepository,
    media: CloudinaryHost,
    config: AuthConfig,
) -> Router {
    marketplace_router_generic(repo, media, config)
}

/// Create a generic marketplace router for any repository and media host
pub fn marketplace_router_generic<R, M>(repo: R, media: M, config: AuthConfig) -> Router
where
    R: ProductRepository
        + DownloadRepository
        + SellerProfileRepository
        + Send
        + Sync
        + 'static,
    M: MediaHost + Send + Sync + 'static,
{
    let state = MarketplaceAppState {
        repo: Arc::new(repo),
        media: Arc::new(media),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/products",
            post(handlers::create_product::<R, M>).get(handlers::list_products::<R, M>),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product::<R, M>)
                .patch(handlers::update_product::<R, M>)
                .delete(handlers::delete_product::<R, M>),
        )
        .route("/downloads", post(handlers::record_download::<R, M>))
        .route("/downloads/count", get(handlers::download_count::<R, M>))
        .route("/sales", get(handlers::sales_totals::<R, M>))
        .route("/sales/daily", get(handlers::sales_daily::<R, M>))
        .route(
            "/seller-profile",
            patch(handlers::update_profile::<R, M>).get(handlers::get_profile::<R, M>),
        )
        .with_state(state)
}
