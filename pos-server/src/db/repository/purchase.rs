//! Purchase Repository

use chrono::Utc;
use shared::models::{Purchase, PurchaseCreate, PurchaseUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct PurchaseRepository {
    db: Database,
}

impl PurchaseRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<Purchase> {
        self.db.read(|store| store.purchases.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<Purchase> {
        self.db.read(|store| store.purchases.get(id).cloned())
    }

    pub fn create(&self, data: PurchaseCreate) -> RepoResult<Purchase> {
        self.db.write(|store| {
            let purchase = Purchase {
                id: new_id(),
                image_url: data.image_url,
                category_id: data.category_id,
                item_name: data.item_name,
                quantity: data.quantity,
                unit: data.unit,
                price: data.price,
                purchase_date: data.purchase_date,
                created_at: Utc::now(),
            };
            store.purchases.insert(purchase.id.clone(), purchase.clone());
            Ok(purchase)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: PurchaseUpdate) -> RepoResult<Purchase> {
        self.db.write(|store| {
            let purchase = store
                .purchases
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Purchase {} not found", id)))?;

            if let Some(image_url) = data.image_url {
                purchase.image_url = Some(image_url);
            }
            if let Some(category_id) = data.category_id {
                purchase.category_id = category_id;
            }
            if let Some(item_name) = data.item_name {
                purchase.item_name = item_name;
            }
            if let Some(quantity) = data.quantity {
                purchase.quantity = quantity;
            }
            if let Some(unit) = data.unit {
                purchase.unit = unit;
            }
            if let Some(price) = data.price {
                purchase.price = price;
            }
            if let Some(purchase_date) = data.purchase_date {
                purchase.purchase_date = purchase_date;
            }
            Ok(purchase.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.db.write(|store| store.purchases.remove(id).is_some())
    }
}
