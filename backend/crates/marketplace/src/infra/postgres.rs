//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{DownloadId, ProductId, UserId};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Download, Product, SellerProfile};
use crate::domain::repository::{
    DownloadRepository, ProductRepository, SaleRecord, SellerProfileRepository,
};
use crate::error::MarketplaceResult;

/// PostgreSQL-backed marketplace repository. One type implements all
/// three persistence traits against the same pool.
#[derive(Clone)]
pub struct PgMarketplaceRepository {
    pool: PgPool,
}

impl PgMarketplaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgMarketplaceRepository {
    async fn create(&self, product: &Product) -> MarketplaceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                user_id,
                name,
                description,
                price,
                image_url,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(product.user_id.as_uuid())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> MarketplaceResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                user_id,
                name,
                description,
                price,
                image_url,
                created_at,
                updated_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn list_by_seller(&self, user_id: &UserId) -> MarketplaceResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                user_id,
                name,
                description,
                price,
                image_url,
                created_at,
                updated_at
            FROM products
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn update(&self, product: &Product) -> MarketplaceResult<()> {
        sqlx::query(
            r#"
            UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                image_url = $5,
                updated_at = $6
            WHERE product_id = $1
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, product_id: &ProductId) -> MarketplaceResult<()> {
        sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn sum_price_by_seller(&self, user_id: &UserId) -> MarketplaceResult<Decimal> {
        let total = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(price), 0) FROM products WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

impl DownloadRepository for PgMarketplaceRepository {
    async fn create(&self, download: &Download) -> MarketplaceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO downloads (download_id, product_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(download.download_id.as_uuid())
        .bind(download.product_id.as_uuid())
        .bind(download.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn count_for_product_since(
        &self,
        product_id: &ProductId,
        since: DateTime<Utc>,
    ) -> MarketplaceResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM downloads WHERE product_id = $1 AND created_at >= $2",
        )
        .bind(product_id.as_uuid())
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn count_for_seller_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> MarketplaceResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM downloads d
            JOIN products p ON p.product_id = d.product_id
            WHERE p.user_id = $1 AND d.created_at >= $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn sales_for_seller_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> MarketplaceResult<Vec<SaleRecord>> {
        let rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT d.created_at AS downloaded_at, p.price
            FROM downloads d
            JOIN products p ON p.product_id = d.product_id
            WHERE p.user_id = $1 AND d.created_at >= $2
            ORDER BY d.created_at
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SaleRow::into_record).collect())
    }
}

impl SellerProfileRepository for PgMarketplaceRepository {
    async fn find_by_user(&self, user_id: &UserId) -> MarketplaceResult<Option<SellerProfile>> {
        let row = sqlx::query_as::<_, SellerProfileRow>(
            r#"
            SELECT
                user_id,
                bio,
                story,
                profile_pic_url,
                created_at,
                updated_at
            FROM seller_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SellerProfileRow::into_profile))
    }

    async fn update(&self, profile: &SellerProfile) -> MarketplaceResult<()> {
        sqlx::query(
            r#"
            UPDATE seller_profiles SET
                bio = $2,
                story = $3,
                profile_pic_url = $4,
                updated_at = $5
            WHERE user_id = $1
            "#,
        )
        .bind(profile.user_id.as_uuid())
        .bind(&profile.bio)
        .bind(&profile.story)
        .bind(&profile.profile_pic_url)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    user_id: Uuid,
    name: String,
    description: Option<String>,
    price: Decimal,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SaleRow {
    downloaded_at: DateTime<Utc>,
    price: Decimal,
}

impl SaleRow {
    fn into_record(self) -> SaleRecord {
        SaleRecord {
            downloaded_at: self.downloaded_at,
            price: self.price,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SellerProfileRow {
    user_id: Uuid,
    bio: Option<String>,
    story: Option<String>,
    profile_pic_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SellerProfileRow {
    fn into_profile(self) -> SellerProfile {
        SellerProfile {
            user_id: UserId::from_uuid(self.user_id),
            bio: self.bio,
            story: self.story,
            profile_pic_url: self.profile_pic_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
