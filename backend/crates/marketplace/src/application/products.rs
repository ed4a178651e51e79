//! Products Use Cases
//!
//! Listing CRUD with the ownership gate: every mutating operation
//! re-fetches the product's owning user id and compares it to the caller's
//! resolved identity. A valid product id owned by someone else is 403, a
//! missing product is 404.

use std::sync::Arc;

use kernel::id::{ProductId, UserId};
use platform::media::MediaHost;
use rust_decimal::Decimal;

use crate::domain::entity::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{MarketplaceError, MarketplaceResult};

/// Cloudinary folder for product images
const PRODUCT_IMAGE_FOLDER: &str = "products";

/// Create input. Every field is required; the image is a base64 data URI
/// destined for the media host.
pub struct CreateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image_data_uri: Option<String>,
}

/// Update input; every field optional, absent means unchanged.
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image_data_uri: Option<String>,
}

/// Products use case
pub struct ProductsUseCase<P, M>
where
    P: ProductRepository,
    M: MediaHost,
{
    products: Arc<P>,
    media: Arc<M>,
}

impl<P, M> ProductsUseCase<P, M>
where
    P: ProductRepository + Sync,
    M: MediaHost + Sync,
{
    pub fn new(products: Arc<P>, media: Arc<M>) -> Self {
        Self { products, media }
    }

    pub async fn create(
        &self,
        seller: UserId,
        input: CreateProductInput,
    ) -> MarketplaceResult<Product> {
        let missing = || MarketplaceError::Validation("All fields are required".to_string());

        let name = input
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(missing)?;
        let description = input
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .ok_or_else(missing)?;
        let price = input.price.ok_or_else(missing)?;
        let data_uri = input.image_data_uri.filter(|d| !d.is_empty()).ok_or_else(missing)?;

        if price <= Decimal::ZERO {
            return Err(MarketplaceError::Validation(
                "Price must be greater than zero.".to_string(),
            ));
        }

        let image_url = self.media.upload(&data_uri, PRODUCT_IMAGE_FOLDER).await?;

        let product = Product::new(seller, name, Some(description), price, Some(image_url));
        self.products.create(&product).await?;

        tracing::info!(product_id = %product.product_id, seller = %seller, "Product created");

        Ok(product)
    }

    pub async fn get(&self, product_id: ProductId) -> MarketplaceResult<Product> {
        self.products
            .find_by_id(&product_id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found("Product"))
    }

    /// The seller's own products, newest first
    pub async fn list(&self, seller: UserId) -> MarketplaceResult<Vec<Product>> {
        self.products.list_by_seller(&seller).await
    }

    pub async fn update(
        &self,
        caller: UserId,
        product_id: ProductId,
        input: UpdateProductInput,
    ) -> MarketplaceResult<Product> {
        let mut product = self.owned_by(caller, product_id).await?;

        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(MarketplaceError::Validation(
                    "Name cannot be empty.".to_string(),
                ));
            }
            product.name = name;
        }

        if let Some(description) = input.description {
            let description = description.trim().to_string();
            product.description = if description.is_empty() {
                None
            } else {
                Some(description)
            };
        }

        if let Some(price) = input.price {
            if price <= Decimal::ZERO {
                return Err(MarketplaceError::Validation(
                    "Price must be greater than zero.".to_string(),
                ));
            }
            product.price = price;
        }

        if let Some(data_uri) = &input.image_data_uri {
            product.image_url =
                Some(self.media.upload(data_uri, PRODUCT_IMAGE_FOLDER).await?);
        }

        product.touch();
        self.products.update(&product).await?;

        tracing::info!(product_id = %product.product_id, "Product updated");

        Ok(product)
    }

    pub async fn delete(
        &self,
        caller: UserId,
        product_id: ProductId,
    ) -> MarketplaceResult<()> {
        let product = self.owned_by(caller, product_id).await?;

        self.products.delete(&product.product_id).await?;

        tracing::info!(product_id = %product.product_id, "Product deleted");

        Ok(())
    }

    /// The ownership gate: re-fetch the product and compare its owner to
    /// the caller. Missing product is 404; someone else's product is 403.
    async fn owned_by(
        &self,
        caller: UserId,
        product_id: ProductId,
    ) -> MarketplaceResult<Product> {
        let product = self
            .products
            .find_by_id(&product_id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found("Product"))?;

        if product.user_id != caller {
            return Err(MarketplaceError::Forbidden);
        }

        Ok(product)
    }
}
