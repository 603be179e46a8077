//! Category Repository

use shared::models::{Category, CategoryCreate, CategoryUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct CategoryRepository {
    db: Database,
}

impl CategoryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<Category> {
        self.db.read(|store| store.categories.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<Category> {
        self.db.read(|store| store.categories.get(id).cloned())
    }

    /// Create a new category; the slug must be unique
    pub fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        self.db.write(|store| {
            if store.categories.values().any(|c| c.slug == data.slug) {
                return Err(RepoError::Duplicate(format!(
                    "Category slug '{}' already exists",
                    data.slug
                )));
            }

            let category = Category {
                id: new_id(),
                name: data.name,
                slug: data.slug,
            };
            store
                .categories
                .insert(category.id.clone(), category.clone());
            Ok(category)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        self.db.write(|store| {
            if let Some(ref new_slug) = data.slug
                && store
                    .categories
                    .values()
                    .any(|c| c.id != id && &c.slug == new_slug)
            {
                return Err(RepoError::Duplicate(format!(
                    "Category slug '{}' already exists",
                    new_slug
                )));
            }

            let category = store
                .categories
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))?;

            if let Some(name) = data.name {
                category.name = name;
            }
            if let Some(slug) = data.slug {
                category.slug = slug;
            }
            Ok(category.clone())
        })
    }

    /// Delete a category.
    ///
    /// Products referencing it are left with a dangling category id, as
    /// the frontend expects; joined views drop unresolved references.
    pub fn delete(&self, id: &str) -> bool {
        self.db.write(|store| store.categories.remove(id).is_some())
    }
}
