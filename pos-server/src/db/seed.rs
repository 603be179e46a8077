//! Demo dataset
//!
//! The sample restaurant the frontend is developed against: catalog,
//! floor plan, staff, a day of orders (including the QR queue), expenses
//! and purchases. Loaded by [`Database::seeded`](crate::db::Database::seeded);
//! tests build empty stores instead.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use shared::models::{
    Category, DiningTable, Employee, Expense, ExpenseCategory, Order, OrderItem, Product,
    Purchase,
};
use shared::order::{DiningOption, DiscountType, OrderSource, OrderStatus, PaymentStatus};

use crate::db::{Store, new_id};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("valid seed timestamp")
}

/// Money/decimal literal from cents
fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn seed_demo_data(store: &mut Store) {
    seed_catalog(store);
    seed_tables(store);
    seed_employees(store);
    seed_orders(store);
    seed_expenses(store);
    seed_purchases(store);

    // Eight demo orders already numbered 1-8
    store.set_order_counter(9);
}

fn seed_catalog(store: &mut Store) {
    let categories = [
        ("1", "Rice", "rice"),
        ("2", "Beverages", "beverages"),
        ("3", "Salads", "salads"),
        ("4", "Soup", "soup"),
        ("5", "Pizza", "pizza"),
    ];
    for (id, name, slug) in categories {
        store.categories.insert(
            id.to_string(),
            Category {
                id: id.to_string(),
                name: name.to_string(),
                slug: slug.to_string(),
            },
        );
    }

    let created_at = ts(2025, 10, 1, 10, 0, 0);
    let products: [(&str, &str, i64, &str, &str, &str, i64); 24] = [
        ("1", "Shrimp Basil Salad", 1060, "3", "plate", "Fresh shrimp with basil and greens", 50),
        ("2", "Onion Rings", 850, "2", "serving", "Crispy fried onion rings", 100),
        ("3", "Smoked Bacon", 1200, "3", "serving", "Premium smoked bacon strips", 75),
        ("4", "Fresh Tomatoes", 950, "3", "kg", "Organic fresh tomatoes", 25),
        ("5", "Chicken Burger", 1050, "4", "piece", "Juicy grilled chicken burger", 60),
        ("6", "Red Onion Rings", 850, "2", "serving", "Red onion rings with special sauce", 80),
        ("7", "Beef Burger", 1050, "4", "piece", "Classic beef burger with cheese", 55),
        ("8", "Grilled Burger", 1050, "4", "piece", "Premium grilled burger", 45),
        ("9", "Fresh Basil Salad", 850, "3", "plate", "Garden fresh basil salad", 70),
        ("10", "Vegetable Pizza", 1500, "5", "piece", "Mixed vegetable pizza", 40),
        ("11", "Fish & Chips", 1250, "4", "serving", "Crispy fish with fries", 35),
        ("12", "Fried Rice", 900, "1", "plate", "Classic fried rice", 90),
        ("13", "Biryani Rice", 1100, "1", "plate", "Aromatic biryani rice", 65),
        ("14", "Chicken Rice", 1000, "1", "plate", "Tender chicken with rice", 85),
        ("15", "Caesar Salad", 950, "3", "plate", "Classic caesar salad", 55),
        ("16", "Greek Salad", 1000, "3", "plate", "Traditional greek salad", 50),
        ("17", "Tomato Soup", 650, "4", "bowl", "Creamy tomato soup", 100),
        ("18", "Mushroom Soup", 700, "4", "bowl", "Rich mushroom soup", 95),
        ("19", "Margherita Pizza", 1400, "5", "piece", "Classic margherita pizza", 42),
        ("20", "Pepperoni Pizza", 1600, "5", "piece", "Spicy pepperoni pizza", 38),
        ("21", "Orange Juice", 450, "2", "glass", "Fresh orange juice", 120),
        ("22", "Mango Juice", 450, "2", "glass", "Sweet mango juice", 110),
        ("23", "Coffee", 350, "2", "cup", "Fresh brewed coffee", 200),
        ("24", "Green Tea", 300, "2", "cup", "Organic green tea", 150),
    ];
    for (id, name, price, category_id, unit, description, quantity) in products {
        store.products.insert(
            id.to_string(),
            Product {
                id: id.to_string(),
                name: name.to_string(),
                price: money(price),
                purchase_cost: None,
                category_id: category_id.to_string(),
                image_url: None,
                unit: unit.to_string(),
                description: Some(description.to_string()),
                quantity: Decimal::from(quantity),
                created_at,
            },
        );
    }
}

fn seed_tables(store: &mut Store) {
    let tables = [
        ("1", "1", "4", "Window seat table"),
        ("2", "2", "2", "Small corner table"),
        ("3", "3", "6", "Large family table"),
        ("4", "4", "4", "Center table"),
        ("5", "5", "2", "Quiet corner"),
        ("6", "6", "8", "Party table"),
        ("7", "7", "4", "Near entrance"),
        ("8", "8", "4", "Outdoor patio"),
    ];
    for (id, number, capacity, description) in tables {
        store.tables.insert(
            id.to_string(),
            DiningTable {
                id: id.to_string(),
                table_number: number.to_string(),
                capacity: Some(capacity.to_string()),
                description: Some(description.to_string()),
                status: "available".to_string(),
            },
        );
    }
}

fn seed_employees(store: &mut Store) {
    let employees: [(&str, &str, &str, &str, &str, &str, &str, (i32, u32, u32), i64); 8] = [
        ("1", "EMP001", "John Smith", "Manager", "Admin", "john.smith@restrobit.com", "+1234567890", (2024, 1, 15), 500000),
        ("2", "EMP002", "Sarah Johnson", "Head Chef", "Kitchen", "sarah.johnson@restrobit.com", "+1234567891", (2024, 2, 1), 450000),
        ("3", "EMP003", "Michael Chen", "Sous Chef", "Kitchen", "michael.chen@restrobit.com", "+1234567892", (2024, 3, 10), 350000),
        ("4", "EMP004", "Emma Wilson", "Waitress", "Service", "emma.wilson@restrobit.com", "+1234567893", (2024, 4, 5), 250000),
        ("5", "EMP005", "David Martinez", "Waiter", "Service", "david.martinez@restrobit.com", "+1234567894", (2024, 4, 20), 250000),
        ("6", "EMP006", "Lisa Anderson", "Receptionist", "Reception", "lisa.anderson@restrobit.com", "+1234567895", (2024, 5, 1), 280000),
        ("7", "EMP007", "Robert Taylor", "Accountant", "Finance", "robert.taylor@restrobit.com", "+1234567896", (2024, 6, 15), 400000),
        ("8", "EMP008", "Jennifer Lee", "HR Manager", "HR", "jennifer.lee@restrobit.com", "+1234567897", (2024, 7, 1), 420000),
    ];
    for (id, badge, name, position, department, email, phone, (y, m, d), salary) in employees {
        let joined = ts(y, m, d, 0, 0, 0);
        store.employees.insert(
            id.to_string(),
            Employee {
                id: id.to_string(),
                employee_id: badge.to_string(),
                name: name.to_string(),
                position: position.to_string(),
                department: department.to_string(),
                email: Some(email.to_string()),
                phone: Some(phone.to_string()),
                joining_date: joined,
                salary: money(salary),
                photo_url: None,
                status: "active".to_string(),
                created_at: joined,
            },
        );
    }
}

struct SeedOrder {
    id: &'static str,
    number: &'static str,
    table_id: Option<&'static str>,
    dining_option: DiningOption,
    customer_name: Option<&'static str>,
    customer_phone: Option<&'static str>,
    source: OrderSource,
    subtotal: i64,
    discount: i64,
    total: i64,
    status: OrderStatus,
    payment_status: PaymentStatus,
    payment_method: Option<&'static str>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

fn seed_orders(store: &mut Store) {
    let now = Utc::now();
    let orders = [
        SeedOrder {
            id: "sale-1",
            number: "1",
            table_id: Some("1"),
            dining_option: DiningOption::DineIn,
            customer_name: Some("John Smith"),
            customer_phone: None,
            source: OrderSource::Pos,
            subtotal: 4550,
            discount: 500,
            total: 4050,
            status: OrderStatus::Completed,
            payment_status: PaymentStatus::Paid,
            payment_method: Some("cash"),
            created_at: ts(2025, 10, 6, 10, 30, 0),
            completed_at: Some(ts(2025, 10, 6, 10, 45, 0)),
        },
        SeedOrder {
            id: "sale-2",
            number: "2",
            table_id: None,
            dining_option: DiningOption::Takeaway,
            customer_name: Some("Sarah Johnson"),
            customer_phone: None,
            source: OrderSource::Pos,
            subtotal: 3200,
            discount: 0,
            total: 3200,
            status: OrderStatus::Completed,
            payment_status: PaymentStatus::Paid,
            payment_method: Some("card"),
            created_at: ts(2025, 10, 6, 11, 15, 0),
            completed_at: Some(ts(2025, 10, 6, 11, 30, 0)),
        },
        SeedOrder {
            id: "sale-3",
            number: "3",
            table_id: Some("3"),
            dining_option: DiningOption::DineIn,
            customer_name: Some("Michael Brown"),
            customer_phone: None,
            source: OrderSource::Pos,
            subtotal: 6875,
            discount: 1000,
            total: 5875,
            status: OrderStatus::Completed,
            payment_status: PaymentStatus::Paid,
            payment_method: Some("aba"),
            created_at: ts(2025, 10, 6, 12, 0, 0),
            completed_at: Some(ts(2025, 10, 6, 12, 20, 0)),
        },
        SeedOrder {
            id: "sale-4",
            number: "4",
            table_id: None,
            dining_option: DiningOption::Delivery,
            customer_name: Some("Emily Davis"),
            customer_phone: None,
            source: OrderSource::Pos,
            subtotal: 5520,
            discount: 0,
            total: 5520,
            status: OrderStatus::Confirmed,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            created_at: ts(2025, 10, 6, 13, 45, 0),
            completed_at: None,
        },
        SeedOrder {
            id: "sale-5",
            number: "5",
            table_id: Some("5"),
            dining_option: DiningOption::DineIn,
            customer_name: None,
            customer_phone: None,
            source: OrderSource::Pos,
            subtotal: 2850,
            discount: 200,
            total: 2650,
            status: OrderStatus::Completed,
            payment_status: PaymentStatus::Paid,
            payment_method: Some("cash"),
            created_at: ts(2025, 10, 6, 14, 20, 0),
            completed_at: Some(ts(2025, 10, 6, 14, 35, 0)),
        },
        SeedOrder {
            id: "qr-order-1",
            number: "6",
            table_id: Some("2"),
            dining_option: DiningOption::DineIn,
            customer_name: Some("James Wilson"),
            customer_phone: Some("+1234567890"),
            source: OrderSource::Qr,
            subtotal: 4200,
            discount: 0,
            total: 4200,
            status: OrderStatus::QrPending,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            created_at: now,
            completed_at: None,
        },
        SeedOrder {
            id: "qr-order-2",
            number: "7",
            table_id: Some("4"),
            dining_option: DiningOption::DineIn,
            customer_name: Some("Linda Martinez"),
            customer_phone: Some("+1234567891"),
            source: OrderSource::Qr,
            subtotal: 6750,
            discount: 0,
            total: 6750,
            status: OrderStatus::QrPending,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            created_at: now,
            completed_at: None,
        },
        SeedOrder {
            id: "qr-order-3",
            number: "8",
            table_id: None,
            dining_option: DiningOption::Takeaway,
            customer_name: Some("Robert Chen"),
            customer_phone: Some("+1234567892"),
            source: OrderSource::Qr,
            subtotal: 2800,
            discount: 0,
            total: 2800,
            status: OrderStatus::QrPending,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            created_at: now,
            completed_at: None,
        },
    ];

    for seed in orders {
        store.orders.insert(
            seed.id.to_string(),
            Order {
                id: seed.id.to_string(),
                order_number: seed.number.to_string(),
                table_id: seed.table_id.map(str::to_string),
                dining_option: seed.dining_option,
                customer_name: seed.customer_name.map(str::to_string),
                customer_phone: seed.customer_phone.map(str::to_string),
                order_source: seed.source,
                subtotal: money(seed.subtotal),
                discount: money(seed.discount),
                discount_type: DiscountType::Amount,
                total: money(seed.total),
                status: seed.status,
                payment_status: seed.payment_status,
                payment_method: seed.payment_method.map(str::to_string),
                created_at: seed.created_at,
                completed_at: seed.completed_at,
            },
        );
    }

    // Items for the QR queue so the acceptance view has lines to show
    let qr_items: [(&str, &str, i32, i64); 9] = [
        ("qr-order-1", "5", 2, 1050),
        ("qr-order-1", "10", 1, 1500),
        ("qr-order-1", "21", 2, 450),
        ("qr-order-2", "1", 2, 1060),
        ("qr-order-2", "7", 3, 1050),
        ("qr-order-2", "23", 2, 350),
        ("qr-order-2", "24", 1, 300),
        ("qr-order-3", "12", 2, 900),
        ("qr-order-3", "22", 2, 450),
    ];
    for (order_id, product_id, quantity, price) in qr_items {
        let id = new_id();
        store.order_items.insert(
            id.clone(),
            OrderItem {
                id,
                order_id: order_id.to_string(),
                product_id: product_id.to_string(),
                quantity,
                price: money(price),
                total: money(price * i64::from(quantity)),
            },
        );
    }
}

fn seed_expenses(store: &mut Store) {
    let categories = [
        ("exp-cat-1", "Office Supplies", "Stationery, printing, and office materials"),
        ("exp-cat-2", "Travel", "Transportation and travel expenses"),
        ("exp-cat-3", "Utilities", "Electricity, water, and internet"),
        ("exp-cat-4", "Food & Ingredients", "Raw materials and ingredients for kitchen"),
        ("exp-cat-5", "Maintenance", "Repairs and maintenance"),
    ];
    for (id, name, description) in categories {
        store.expense_categories.insert(
            id.to_string(),
            ExpenseCategory {
                id: id.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
            },
        );
    }

    let expenses: [(&str, DateTime<Utc>, &str, &str, i64, &str, &str); 3] = [
        ("exp-1", ts(2025, 10, 6, 9, 0, 0), "exp-cat-4", "Fresh vegetables and meat", 25000, "Kg", "15.5"),
        ("exp-2", ts(2025, 10, 5, 14, 30, 0), "exp-cat-3", "Monthly electricity bill", 45000, "Unit", "1"),
        ("exp-3", ts(2025, 10, 4, 11, 15, 0), "exp-cat-1", "Printer paper and ink", 8550, "Box", "3"),
    ];
    for (id, date, category_id, description, amount, unit, quantity) in expenses {
        store.expenses.insert(
            id.to_string(),
            Expense {
                id: id.to_string(),
                expense_date: date,
                category_id: category_id.to_string(),
                description: description.to_string(),
                amount: money(amount),
                unit: unit.to_string(),
                quantity: quantity.parse().expect("valid seed quantity"),
                total: money(amount),
                created_at: date,
            },
        );
    }
}

fn seed_purchases(store: &mut Store) {
    let purchases: [(&str, &str, &str, i64, &str, i64, DateTime<Utc>); 3] = [
        ("purchase-1", "4", "Fresh Vegetables", 50, "Kg", 500, ts(2025, 10, 6, 8, 0, 0)),
        ("purchase-2", "4", "Chicken Meat", 30, "Kg", 850, ts(2025, 10, 5, 9, 30, 0)),
        ("purchase-3", "1", "Rice", 100, "Kg", 250, ts(2025, 10, 4, 10, 0, 0)),
    ];
    for (id, category_id, item_name, quantity, unit, price, date) in purchases {
        store.purchases.insert(
            id.to_string(),
            Purchase {
                id: id.to_string(),
                image_url: None,
                category_id: category_id.to_string(),
                item_name: item_name.to_string(),
                quantity: Decimal::from(quantity),
                unit: unit.to_string(),
                price: money(price),
                purchase_date: date,
                created_at: date,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn demo_dataset_matches_expected_counts() {
        let db = Database::seeded();
        db.read(|store| {
            assert_eq!(store.categories.len(), 5);
            assert_eq!(store.products.len(), 24);
            assert_eq!(store.tables.len(), 8);
            assert_eq!(store.employees.len(), 8);
            assert_eq!(store.orders.len(), 8);
            assert_eq!(store.order_items.len(), 9);
            assert_eq!(store.expense_categories.len(), 5);
            assert_eq!(store.expenses.len(), 3);
            assert_eq!(store.purchases.len(), 3);
        });
        // Sequence resumes after the eight demo orders
        assert_eq!(db.write(|store| store.next_order_number()), "9");
    }
}
