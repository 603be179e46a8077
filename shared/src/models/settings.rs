//! Settings Model
//!
//! Singleton business configuration. Created lazily with defaults on
//! first read; updates are partial merges that refresh `updated_at`.
//! Boolean-ish flags are kept as "true"/"false" strings to match the
//! wire format the frontend settings forms submit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Business configuration singleton
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: String,

    // -- Business profile --
    pub business_name: String,
    pub business_logo: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_format: String,
    pub time_format: String,
    pub terminal_id: Option<String>,

    // -- Payment --
    pub payment_cash: String,
    pub payment_card: String,
    pub payment_aba: String,
    pub payment_acleda: String,
    pub payment_credit: String,
    pub default_payment_method: String,
    pub min_transaction_amount: Decimal,
    pub max_transaction_amount: Option<Decimal>,

    // -- Tax and discount --
    pub vat_rate: Decimal,
    pub service_tax_rate: Decimal,
    pub default_discount: Decimal,
    pub enable_percentage_discount: String,
    pub enable_fixed_discount: String,
    pub max_discount: Decimal,

    // -- Receipt --
    pub invoice_prefix: String,
    pub receipt_header: Option<String>,
    pub receipt_footer: Option<String>,
    pub receipt_logo: Option<String>,
    pub auto_print_receipt: String,
    pub show_logo_on_receipt: String,
    pub include_tax_breakdown: String,

    // -- Hardware --
    pub receipt_printer: String,
    pub kitchen_printer: String,
    pub paper_size: String,
    pub enable_barcode_scanner: String,
    pub enable_cash_drawer: String,

    // -- Localization --
    pub currency: String,
    pub language: String,
    pub decimal_places: String,
    pub rounding_rule: String,
    pub currency_symbol_position: String,

    // -- Backup --
    pub auto_backup: String,
    pub backup_frequency: String,
    pub backup_storage: String,

    // -- Notifications --
    pub low_stock_alerts: String,
    pub stock_threshold: i32,
    pub sale_notifications: String,
    pub discount_alerts: String,
    pub system_update_notifications: String,
    pub notification_email: Option<String>,

    // -- Appearance --
    pub color_theme: String,
    pub layout_preference: String,
    pub font_size: String,
    pub compact_mode: String,
    pub show_animations: String,

    // -- Cashier permissions --
    pub perm_access_reports: String,
    pub perm_access_settings: String,
    pub perm_process_refunds: String,
    pub perm_manage_inventory: String,

    pub updated_at: DateTime<Utc>,
}

impl Settings {
    /// Factory defaults, stamped with the given id and time
    pub fn with_defaults(id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            business_name: "BondPos POS".into(),
            business_logo: None,
            address: None,
            phone: None,
            email: None,
            date_format: "dd-mm-yyyy".into(),
            time_format: "12h".into(),
            terminal_id: None,
            payment_cash: "true".into(),
            payment_card: "true".into(),
            payment_aba: "true".into(),
            payment_acleda: "true".into(),
            payment_credit: "true".into(),
            default_payment_method: "cash".into(),
            min_transaction_amount: Decimal::ZERO,
            max_transaction_amount: None,
            vat_rate: Decimal::ZERO,
            service_tax_rate: Decimal::ZERO,
            default_discount: Decimal::ZERO,
            enable_percentage_discount: "true".into(),
            enable_fixed_discount: "true".into(),
            max_discount: Decimal::from(50),
            invoice_prefix: "INV-".into(),
            receipt_header: None,
            receipt_footer: None,
            receipt_logo: None,
            auto_print_receipt: "false".into(),
            show_logo_on_receipt: "true".into(),
            include_tax_breakdown: "true".into(),
            receipt_printer: "default".into(),
            kitchen_printer: "none".into(),
            paper_size: "80mm".into(),
            enable_barcode_scanner: "false".into(),
            enable_cash_drawer: "true".into(),
            currency: "usd".into(),
            language: "en".into(),
            decimal_places: "2".into(),
            rounding_rule: "nearest".into(),
            currency_symbol_position: "before".into(),
            auto_backup: "true".into(),
            backup_frequency: "daily".into(),
            backup_storage: "cloud".into(),
            low_stock_alerts: "true".into(),
            stock_threshold: 10,
            sale_notifications: "false".into(),
            discount_alerts: "false".into(),
            system_update_notifications: "true".into(),
            notification_email: None,
            color_theme: "orange".into(),
            layout_preference: "grid".into(),
            font_size: "medium".into(),
            compact_mode: "false".into(),
            show_animations: "true".into(),
            perm_access_reports: "true".into(),
            perm_access_settings: "false".into(),
            perm_process_refunds: "false".into(),
            perm_manage_inventory: "true".into(),
            updated_at: now,
        }
    }

    /// Shallow merge: fields present in the update replace current values
    pub fn apply(&mut self, update: SettingsUpdate, now: DateTime<Utc>) {
        let SettingsUpdate {
            business_name,
            business_logo,
            address,
            phone,
            email,
            date_format,
            time_format,
            terminal_id,
            payment_cash,
            payment_card,
            payment_aba,
            payment_acleda,
            payment_credit,
            default_payment_method,
            min_transaction_amount,
            max_transaction_amount,
            vat_rate,
            service_tax_rate,
            default_discount,
            enable_percentage_discount,
            enable_fixed_discount,
            max_discount,
            invoice_prefix,
            receipt_header,
            receipt_footer,
            receipt_logo,
            auto_print_receipt,
            show_logo_on_receipt,
            include_tax_breakdown,
            receipt_printer,
            kitchen_printer,
            paper_size,
            enable_barcode_scanner,
            enable_cash_drawer,
            currency,
            language,
            decimal_places,
            rounding_rule,
            currency_symbol_position,
            auto_backup,
            backup_frequency,
            backup_storage,
            low_stock_alerts,
            stock_threshold,
            sale_notifications,
            discount_alerts,
            system_update_notifications,
            notification_email,
            color_theme,
            layout_preference,
            font_size,
            compact_mode,
            show_animations,
            perm_access_reports,
            perm_access_settings,
            perm_process_refunds,
            perm_manage_inventory,
        } = update;

        merge(&mut self.business_name, business_name);
        merge_opt(&mut self.business_logo, business_logo);
        merge_opt(&mut self.address, address);
        merge_opt(&mut self.phone, phone);
        merge_opt(&mut self.email, email);
        merge(&mut self.date_format, date_format);
        merge(&mut self.time_format, time_format);
        merge_opt(&mut self.terminal_id, terminal_id);
        merge(&mut self.payment_cash, payment_cash);
        merge(&mut self.payment_card, payment_card);
        merge(&mut self.payment_aba, payment_aba);
        merge(&mut self.payment_acleda, payment_acleda);
        merge(&mut self.payment_credit, payment_credit);
        merge(&mut self.default_payment_method, default_payment_method);
        merge(&mut self.min_transaction_amount, min_transaction_amount);
        merge_opt(&mut self.max_transaction_amount, max_transaction_amount);
        merge(&mut self.vat_rate, vat_rate);
        merge(&mut self.service_tax_rate, service_tax_rate);
        merge(&mut self.default_discount, default_discount);
        merge(
            &mut self.enable_percentage_discount,
            enable_percentage_discount,
        );
        merge(&mut self.enable_fixed_discount, enable_fixed_discount);
        merge(&mut self.max_discount, max_discount);
        merge(&mut self.invoice_prefix, invoice_prefix);
        merge_opt(&mut self.receipt_header, receipt_header);
        merge_opt(&mut self.receipt_footer, receipt_footer);
        merge_opt(&mut self.receipt_logo, receipt_logo);
        merge(&mut self.auto_print_receipt, auto_print_receipt);
        merge(&mut self.show_logo_on_receipt, show_logo_on_receipt);
        merge(&mut self.include_tax_breakdown, include_tax_breakdown);
        merge(&mut self.receipt_printer, receipt_printer);
        merge(&mut self.kitchen_printer, kitchen_printer);
        merge(&mut self.paper_size, paper_size);
        merge(&mut self.enable_barcode_scanner, enable_barcode_scanner);
        merge(&mut self.enable_cash_drawer, enable_cash_drawer);
        merge(&mut self.currency, currency);
        merge(&mut self.language, language);
        merge(&mut self.decimal_places, decimal_places);
        merge(&mut self.rounding_rule, rounding_rule);
        merge(
            &mut self.currency_symbol_position,
            currency_symbol_position,
        );
        merge(&mut self.auto_backup, auto_backup);
        merge(&mut self.backup_frequency, backup_frequency);
        merge(&mut self.backup_storage, backup_storage);
        merge(&mut self.low_stock_alerts, low_stock_alerts);
        merge(&mut self.stock_threshold, stock_threshold);
        merge(&mut self.sale_notifications, sale_notifications);
        merge(&mut self.discount_alerts, discount_alerts);
        merge(
            &mut self.system_update_notifications,
            system_update_notifications,
        );
        merge_opt(&mut self.notification_email, notification_email);
        merge(&mut self.color_theme, color_theme);
        merge(&mut self.layout_preference, layout_preference);
        merge(&mut self.font_size, font_size);
        merge(&mut self.compact_mode, compact_mode);
        merge(&mut self.show_animations, show_animations);
        merge(&mut self.perm_access_reports, perm_access_reports);
        merge(&mut self.perm_access_settings, perm_access_settings);
        merge(&mut self.perm_process_refunds, perm_process_refunds);
        merge(&mut self.perm_manage_inventory, perm_manage_inventory);

        self.updated_at = now;
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn merge_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if let Some(v) = value {
        *slot = Some(v);
    }
}

/// Update settings payload — every field optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub business_name: Option<String>,
    pub business_logo: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub terminal_id: Option<String>,
    pub payment_cash: Option<String>,
    pub payment_card: Option<String>,
    pub payment_aba: Option<String>,
    pub payment_acleda: Option<String>,
    pub payment_credit: Option<String>,
    pub default_payment_method: Option<String>,
    pub min_transaction_amount: Option<Decimal>,
    pub max_transaction_amount: Option<Decimal>,
    pub vat_rate: Option<Decimal>,
    pub service_tax_rate: Option<Decimal>,
    pub default_discount: Option<Decimal>,
    pub enable_percentage_discount: Option<String>,
    pub enable_fixed_discount: Option<String>,
    pub max_discount: Option<Decimal>,
    pub invoice_prefix: Option<String>,
    pub receipt_header: Option<String>,
    pub receipt_footer: Option<String>,
    pub receipt_logo: Option<String>,
    pub auto_print_receipt: Option<String>,
    pub show_logo_on_receipt: Option<String>,
    pub include_tax_breakdown: Option<String>,
    pub receipt_printer: Option<String>,
    pub kitchen_printer: Option<String>,
    pub paper_size: Option<String>,
    pub enable_barcode_scanner: Option<String>,
    pub enable_cash_drawer: Option<String>,
    pub currency: Option<String>,
    pub language: Option<String>,
    pub decimal_places: Option<String>,
    pub rounding_rule: Option<String>,
    pub currency_symbol_position: Option<String>,
    pub auto_backup: Option<String>,
    pub backup_frequency: Option<String>,
    pub backup_storage: Option<String>,
    pub low_stock_alerts: Option<String>,
    pub stock_threshold: Option<i32>,
    pub sale_notifications: Option<String>,
    pub discount_alerts: Option<String>,
    pub system_update_notifications: Option<String>,
    pub notification_email: Option<String>,
    pub color_theme: Option<String>,
    pub layout_preference: Option<String>,
    pub font_size: Option<String>,
    pub compact_mode: Option<String>,
    pub show_animations: Option<String>,
    pub perm_access_reports: Option<String>,
    pub perm_access_settings: Option<String>,
    pub perm_process_refunds: Option<String>,
    pub perm_manage_inventory: Option<String>,
}
