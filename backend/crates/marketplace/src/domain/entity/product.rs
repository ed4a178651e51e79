//! Product Entity
//!
//! A handcrafted item listed by a seller. The price is a decimal currency
//! value; arithmetic on it stays in `Decimal` end to end and is only
//! rounded at presentation time.

use chrono::{DateTime, Utc};
use kernel::id::{ProductId, UserId};
use rust_decimal::Decimal;

/// Product entity
#[derive(Debug, Clone)]
pub struct Product {
    /// Internal UUID identifier
    pub product_id: ProductId,
    /// Owning seller
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// List price
    pub price: Decimal,
    /// Public URL of the product image, if one was uploaded
    pub image_url: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product owned by `user_id`
    pub fn new(
        user_id: UserId,
        name: String,
        description: Option<String>,
        price: Decimal,
        image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            product_id: ProductId::new(),
            user_id,
            name,
            description,
            price,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the entity as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_product_gets_fresh_id() {
        let seller = UserId::new();
        let a = Product::new(seller, "Vase".into(), None, price("19.99"), None);
        let b = Product::new(seller, "Bowl".into(), None, price("25.50"), None);

        assert_ne!(a.product_id, b.product_id);
        assert_eq!(a.user_id, b.user_id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn test_touch_advances_updated_at() {
        let mut product =
            Product::new(UserId::new(), "Vase".into(), None, price("19.99"), None);
        let created = product.updated_at;
        product.touch();
        assert!(product.updated_at >= created);
    }
}
