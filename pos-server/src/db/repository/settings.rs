//! Settings Repository
//!
//! Singleton: at most one record, created lazily with factory defaults
//! on first read.

use chrono::Utc;
use shared::models::{Settings, SettingsUpdate};

use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct SettingsRepository {
    db: Database,
}

impl SettingsRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Current settings, materializing the defaults on first read
    pub fn get(&self) -> Settings {
        self.db.write(|store| {
            store
                .settings
                .get_or_insert_with(|| Settings::with_defaults(new_id(), Utc::now()))
                .clone()
        })
    }

    /// Partial merge; refreshes `updated_at`
    pub fn update(&self, update: SettingsUpdate) -> Settings {
        self.db.write(|store| {
            let settings = store
                .settings
                .get_or_insert_with(|| Settings::with_defaults(new_id(), Utc::now()));
            settings.apply(update, Utc::now());
            settings.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_read_materializes_defaults() {
        let repo = SettingsRepository::new(Database::new());
        let settings = repo.get();
        assert_eq!(settings.business_name, "BondPos POS");
        assert_eq!(settings.currency, "usd");
        assert_eq!(settings.stock_threshold, 10);

        // Singleton: second read returns the same record
        assert_eq!(repo.get().id, settings.id);
    }

    #[test]
    fn update_merges_and_refreshes_timestamp() {
        let repo = SettingsRepository::new(Database::new());
        let before = repo.get();

        let updated = repo.update(SettingsUpdate {
            business_name: Some("Harbor Grill".to_string()),
            stock_threshold: Some(5),
            ..SettingsUpdate::default()
        });

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.business_name, "Harbor Grill");
        assert_eq!(updated.stock_threshold, 5);
        // Untouched fields keep their defaults
        assert_eq!(updated.currency, "usd");
        assert!(updated.updated_at >= before.updated_at);
    }
}
