//! Product Repository

use chrono::Utc;
use rust_decimal::Decimal;
use shared::models::{Product, ProductCreate, ProductUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<Product> {
        self.db.read(|store| store.products.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<Product> {
        self.db.read(|store| store.products.get(id).cloned())
    }

    pub fn find_by_category(&self, category_id: &str) -> Vec<Product> {
        self.db.read(|store| {
            store
                .products
                .values()
                .filter(|p| p.category_id == category_id)
                .cloned()
                .collect()
        })
    }

    /// Create a product with defaults applied (unit "piece", quantity 0)
    pub fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        self.db.write(|store| {
            let product = Product {
                id: new_id(),
                name: data.name,
                price: data.price,
                purchase_cost: data.purchase_cost,
                category_id: data.category_id,
                image_url: data.image_url,
                unit: data.unit.unwrap_or_else(|| "piece".to_string()),
                description: data.description,
                quantity: data.quantity.unwrap_or(Decimal::ZERO),
                created_at: Utc::now(),
            };
            store.products.insert(product.id.clone(), product.clone());
            Ok(product)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        self.db.write(|store| {
            let product = store
                .products
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))?;

            if let Some(name) = data.name {
                product.name = name;
            }
            if let Some(price) = data.price {
                product.price = price;
            }
            if let Some(cost) = data.purchase_cost {
                product.purchase_cost = Some(cost);
            }
            if let Some(category_id) = data.category_id {
                product.category_id = category_id;
            }
            if let Some(image_url) = data.image_url {
                product.image_url = Some(image_url);
            }
            if let Some(unit) = data.unit {
                product.unit = unit;
            }
            if let Some(description) = data.description {
                product.description = Some(description);
            }
            if let Some(quantity) = data.quantity {
                product.quantity = quantity;
            }
            Ok(product.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.db.write(|store| store.products.remove(id).is_some())
    }
}
