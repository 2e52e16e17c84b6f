//! Store State Manager
//!
//! Single source of truth for products, categories and the store
//! configuration during a session. Construct one [`StoreManager`] at process
//! entry and hand it down by reference; there is no ambient/global instance.
//!
//! # Contract
//!
//! - Loading is per-record: an absent or unreadable snapshot falls back to
//!   the seed dataset for that record alone, logged at warn and never
//!   surfaced as an error.
//! - Every mutation rewrites the affected collection snapshot before the
//!   call returns, whether or not it changed anything.
//! - Mutations on an unknown id are no-ops reported as `Ok(false)`.
//! - Category slugs are unique; a create or rename that would collide is
//!   rejected with [`CatalogError::Duplicate`].

use uuid::Uuid;
use validator::Validate;

use super::error::{CatalogError, CatalogResult};
use crate::db::models::{
    Category, CategoryCreate, CategoryUpdate, Product, ProductCreate, ProductUpdate, StoreInfo,
    StoreInfoUpdate,
};
use crate::db::{seed, SnapshotStorage, StorageResult};
use crate::db::{CATEGORIES_KEY, PRODUCTS_KEY, STORE_CONFIG_KEY};
use crate::utils::slugify;

/// Store state manager
pub struct StoreManager {
    storage: SnapshotStorage,
    products: Vec<Product>,
    categories: Vec<Category>,
    store: StoreInfo,
}

/// Resolve one loaded record, falling back to its seed dataset on absence
/// or on any load failure.
fn load_or_seed<T>(loaded: StorageResult<Option<T>>, record: &str, seed: impl FnOnce() -> T) -> T {
    match loaded {
        Ok(Some(value)) => value,
        Ok(None) => seed(),
        Err(err) => {
            tracing::warn!(record, error = %err, "Unreadable snapshot, using seed data");
            seed()
        }
    }
}

impl StoreManager {
    /// Load the three collections from storage, seeding whatever is missing,
    /// and write the resulting state back so a fresh database is populated
    /// immediately.
    pub fn open(storage: SnapshotStorage) -> CatalogResult<Self> {
        let products = load_or_seed(storage.load_products(), PRODUCTS_KEY, seed::products);
        let categories = load_or_seed(storage.load_categories(), CATEGORIES_KEY, seed::categories);
        let store = load_or_seed(storage.load_store_info(), STORE_CONFIG_KEY, seed::store_info);

        let manager = Self {
            storage,
            products,
            categories,
            store,
        };
        manager.persist_products()?;
        manager.persist_categories()?;
        manager.persist_store()?;

        tracing::info!(
            products = manager.products.len(),
            categories = manager.categories.len(),
            store = %manager.store.name,
            "Catalog loaded"
        );
        Ok(manager)
    }

    // ========== Read Access ==========

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn store(&self) -> &StoreInfo {
        &self.store
    }

    /// Find a product by id
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Products for a storefront category tab; the `todos` slug means all
    pub fn products_in(&self, category_slug: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category_slug == "todos" || p.category == category_slug)
            .collect()
    }

    // ========== Products ==========

    /// Add a product, assigning it a fresh unique id
    pub fn add_product(&mut self, data: ProductCreate) -> CatalogResult<Product> {
        data.validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let id = Uuid::new_v4().to_string();
        if self.products.iter().any(|p| p.id == id) {
            return Err(CatalogError::Duplicate(format!(
                "Product id '{id}' already exists"
            )));
        }

        let mut wholesale_tiers = data.wholesale_tiers;
        wholesale_tiers.sort_by_key(|tier| tier.min_quantity);

        let product = Product {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            image: data.image,
            category: data.category,
            preparation_time: data.preparation_time,
            stock: data.stock,
            is_promo: data.is_promo,
            promo_text: data.promo_text,
            wholesale_tiers,
        };
        self.products.push(product.clone());
        self.persist_products()?;

        tracing::debug!(id = %product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Patch-merge into the product with the given id.
    ///
    /// Returns `Ok(false)` when no product matches; the snapshot is written
    /// either way.
    pub fn update_product(&mut self, id: &str, data: ProductUpdate) -> CatalogResult<bool> {
        let found = match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                if let Some(name) = data.name {
                    product.name = name;
                }
                if let Some(description) = data.description {
                    product.description = description;
                }
                if let Some(price) = data.price {
                    product.price = price;
                }
                if let Some(image) = data.image {
                    product.image = image;
                }
                if let Some(category) = data.category {
                    product.category = category;
                }
                if let Some(preparation_time) = data.preparation_time {
                    product.preparation_time = preparation_time;
                }
                if let Some(stock) = data.stock {
                    product.stock = stock;
                }
                if let Some(is_promo) = data.is_promo {
                    product.is_promo = is_promo;
                }
                if let Some(promo_text) = data.promo_text {
                    product.promo_text = Some(promo_text);
                }
                if let Some(mut tiers) = data.wholesale_tiers {
                    tiers.sort_by_key(|tier| tier.min_quantity);
                    product.wholesale_tiers = tiers;
                }
                true
            }
            None => false,
        };
        self.persist_products()?;
        Ok(found)
    }

    /// Remove the product with the given id; `Ok(false)` when absent
    pub fn delete_product(&mut self, id: &str) -> CatalogResult<bool> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let found = self.products.len() < before;
        self.persist_products()?;
        if found {
            tracing::debug!(id, "Product deleted");
        }
        Ok(found)
    }

    // ========== Categories ==========

    /// Add a category, deriving its slug from the name
    pub fn add_category(&mut self, data: CategoryCreate) -> CatalogResult<Category> {
        data.validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let slug = slugify(&data.name);
        if slug.is_empty() {
            return Err(CatalogError::Validation(format!(
                "Category name '{}' yields an empty slug",
                data.name
            )));
        }
        if self.categories.iter().any(|c| c.slug == slug) {
            return Err(CatalogError::Duplicate(format!(
                "Category '{}' already exists",
                data.name
            )));
        }

        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            slug,
        };
        self.categories.push(category.clone());
        self.persist_categories()?;

        tracing::debug!(id = %category.id, slug = %category.slug, "Category added");
        Ok(category)
    }

    /// Rename the category with the given id, re-deriving its slug.
    ///
    /// Returns `Ok(false)` when no category matches; rejects a rename whose
    /// new slug collides with another category.
    pub fn update_category(&mut self, id: &str, data: CategoryUpdate) -> CatalogResult<bool> {
        let found = match self.categories.iter().position(|c| c.id == id) {
            Some(pos) => {
                if let Some(name) = data.name {
                    let slug = slugify(&name);
                    if slug.is_empty() {
                        return Err(CatalogError::Validation(format!(
                            "Category name '{name}' yields an empty slug"
                        )));
                    }
                    if self
                        .categories
                        .iter()
                        .any(|c| c.slug == slug && c.id != id)
                    {
                        return Err(CatalogError::Duplicate(format!(
                            "Category '{name}' already exists"
                        )));
                    }
                    self.categories[pos].name = name;
                    self.categories[pos].slug = slug;
                }
                true
            }
            None => false,
        };
        self.persist_categories()?;
        Ok(found)
    }

    /// Remove the category with the given id; `Ok(false)` when absent.
    ///
    /// Products referencing the removed slug are left untouched; the link is
    /// soft by design.
    pub fn delete_category(&mut self, id: &str) -> CatalogResult<bool> {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        let found = self.categories.len() < before;
        self.persist_categories()?;
        if found {
            tracing::debug!(id, "Category deleted");
        }
        Ok(found)
    }

    // ========== Store Configuration ==========

    /// Patch-merge into the singleton store configuration
    pub fn update_store(&mut self, data: StoreInfoUpdate) -> CatalogResult<()> {
        if let Some(name) = data.name {
            self.store.name = name;
        }
        if let Some(slug) = data.slug {
            self.store.slug = slug;
        }
        if let Some(banner) = data.banner {
            self.store.banner = Some(banner);
        }
        if let Some(theme_color) = data.theme_color {
            self.store.theme_color = theme_color;
        }
        if let Some(delivery_info) = data.delivery_info {
            self.store.delivery_info = Some(delivery_info);
        }
        if let Some(phone) = data.phone {
            self.store.phone = Some(phone);
        }
        if let Some(social_links) = data.social_links {
            self.store.social_links = Some(social_links);
        }
        self.persist_store()?;
        Ok(())
    }

    // ========== Persistence ==========

    fn persist_products(&self) -> CatalogResult<()> {
        self.storage.save_products(&self.products)?;
        Ok(())
    }

    fn persist_categories(&self) -> CatalogResult<()> {
        self.storage.save_categories(&self.categories)?;
        Ok(())
    }

    fn persist_store(&self) -> CatalogResult<()> {
        self.storage.save_store_info(&self.store)?;
        Ok(())
    }
}
