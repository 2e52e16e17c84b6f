//! Database Models

// Catalog
pub mod category;
pub mod product;

// Store configuration
pub mod store_info;

// Orders
pub mod order;

// Re-exports
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use order::{CartItem, Order, OrderStatus};
pub use product::{Product, ProductCreate, ProductUpdate, WholesaleTier};
pub use store_info::{SocialLinks, StoreInfo, StoreInfoUpdate};
