//! Domain Entities

pub mod download;
pub mod product;
pub mod seller_profile;

pub use download::Download;
pub use product::Product;
pub use seller_profile::SellerProfile;
