//! Dashboard aggregation engine
//!
//! Derives dashboard statistics and report rows from the store for a
//! caller-supplied [`DateWindow`]. Every call recomputes from scratch
//! under one read lock; "sales" means orders with status completed.
//!
//! Amounts are computed as `Decimal` and serialized as JSON numbers,
//! matching what the dashboard charts consume.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use shared::models::Order;
use shared::order::OrderStatus;

use super::window::DateWindow;
use crate::db::{Database, Store};

/// Headline dashboard numbers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub today_sales: f64,
    pub today_orders: usize,
    pub total_revenue: f64,
    /// Lifetime completed-order count. Deliberately NOT window-filtered,
    /// unlike `today_orders` — the dashboard has always shown it that way.
    pub total_orders: usize,
    pub total_expenses: f64,
    pub profit_loss: f64,
    pub total_purchase: f64,
}

/// Revenue per product category
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: String,
    pub revenue: f64,
}

/// Takings per payment method
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodSales {
    pub payment_method: String,
    pub amount: f64,
}

/// Best-selling product
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularProduct {
    pub product: String,
    pub quantity: i64,
    pub revenue: f64,
}

#[derive(Clone)]
pub struct ReportingEngine {
    db: Database,
}

impl ReportingEngine {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn dashboard_stats(&self, window: &DateWindow) -> DashboardStats {
        self.db.read(|store| {
            let completed: Vec<&Order> = store
                .orders
                .values()
                .filter(|o| o.status == OrderStatus::Completed)
                .collect();
            let in_window: Vec<&&Order> = completed
                .iter()
                .filter(|o| window.contains(o.created_at))
                .collect();

            let today_sales: Decimal = in_window.iter().map(|o| o.total).sum();
            let total_discount: Decimal = in_window.iter().map(|o| o.discount).sum();

            let total_purchase: Decimal = store
                .purchases
                .values()
                .filter(|p| window.contains(p.purchase_date))
                .map(|p| p.price * p.quantity)
                .sum();

            let total_expenses: Decimal = store
                .expenses
                .values()
                .filter(|e| window.contains(e.expense_date))
                .map(|e| e.total)
                .sum();

            let total_revenue = today_sales - (total_purchase + total_discount);
            let profit_loss = total_revenue - total_expenses;

            DashboardStats {
                today_sales: to_f64(today_sales),
                today_orders: in_window.len(),
                total_revenue: to_f64(total_revenue),
                total_orders: completed.len(),
                total_expenses: to_f64(total_expenses),
                profit_loss: to_f64(profit_loss),
                total_purchase: to_f64(total_purchase),
            }
        })
    }

    pub fn sales_by_category(&self, window: &DateWindow) -> Vec<CategorySales> {
        self.db.read(|store| {
            let mut revenue: Accumulator<Decimal> = Accumulator::new();

            for order in completed_in_window(store, window) {
                for item in store.order_items.values().filter(|i| i.order_id == order.id) {
                    let Some(product) = store.products.get(&item.product_id) else {
                        continue;
                    };
                    let Some(category) = store.categories.get(&product.category_id) else {
                        continue;
                    };
                    *revenue.entry(category.name.clone(), Decimal::ZERO) += item.total;
                }
            }

            let mut rows: Vec<CategorySales> = revenue
                .into_iter()
                .map(|(category, revenue)| CategorySales {
                    category,
                    revenue: to_f64(revenue),
                })
                .collect();
            rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
            rows
        })
    }

    pub fn sales_by_payment_method(&self, window: &DateWindow) -> Vec<PaymentMethodSales> {
        self.db.read(|store| {
            let mut amounts: Accumulator<Decimal> = Accumulator::new();

            for order in completed_in_window(store, window) {
                let method = order
                    .payment_method
                    .clone()
                    .unwrap_or_else(|| "Not specified".to_string());
                *amounts.entry(method, Decimal::ZERO) += order.total;
            }

            let mut rows: Vec<PaymentMethodSales> = amounts
                .into_iter()
                .map(|(payment_method, amount)| PaymentMethodSales {
                    payment_method,
                    amount: to_f64(amount),
                })
                .collect();
            rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));
            rows
        })
    }

    /// Top five products by quantity sold; ties keep first-encounter order
    pub fn popular_products(&self, window: &DateWindow) -> Vec<PopularProduct> {
        self.db.read(|store| {
            let mut stats: Accumulator<(String, i64, Decimal)> = Accumulator::new();

            for order in completed_in_window(store, window) {
                for item in store.order_items.values().filter(|i| i.order_id == order.id) {
                    let Some(product) = store.products.get(&item.product_id) else {
                        continue;
                    };
                    let entry = stats.entry(
                        product.id.clone(),
                        (product.name.clone(), 0, Decimal::ZERO),
                    );
                    entry.1 += i64::from(item.quantity);
                    entry.2 += item.total;
                }
            }

            let mut rows: Vec<PopularProduct> = stats
                .into_iter()
                .map(|(_, (product, quantity, revenue))| PopularProduct {
                    product,
                    quantity,
                    revenue: to_f64(revenue),
                })
                .collect();
            // Stable sort preserves encounter order among equal quantities
            rows.sort_by(|a, b| b.quantity.cmp(&a.quantity));
            rows.truncate(5);
            rows
        })
    }

    /// Latest completed orders in the window, newest first, at most 10
    pub fn recent_orders(&self, window: &DateWindow) -> Vec<Order> {
        self.db.read(|store| {
            let mut orders = completed_in_window(store, window);
            orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            orders.truncate(10);
            orders
        })
    }
}

/// Completed orders inside the window, oldest first so that grouped
/// results accumulate in creation order.
fn completed_in_window(store: &Store, window: &DateWindow) -> Vec<Order> {
    let mut orders: Vec<Order> = store
        .orders
        .values()
        .filter(|o| o.status == OrderStatus::Completed && window.contains(o.created_at))
        .cloned()
        .collect();
    orders.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    orders
}

/// Grouping accumulator that remembers first-encounter order of its keys
struct Accumulator<V> {
    entries: Vec<(String, V)>,
}

impl<V> Accumulator<V> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn entry(&mut self, key: String, default: V) -> &mut V {
        if let Some(index) = self.entries.iter().position(|(k, _)| *k == key) {
            &mut self.entries[index].1
        } else {
            self.entries.push((key, default));
            &mut self.entries.last_mut().expect("just pushed").1
        }
    }

    fn into_iter(self) -> impl Iterator<Item = (String, V)> {
        self.entries.into_iter()
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{
        CategoryRepository, ExpenseRepository, OrderRepository, ProductRepository,
        PurchaseRepository,
    };
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;
    use shared::models::{
        CategoryCreate, ExpenseCreate, OrderCreate, OrderItemInput, ProductCreate, PurchaseCreate,
    };

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    struct Fixture {
        db: Database,
        cola_id: String,
        pizza_id: String,
    }

    /// Two categories, two products, no orders yet
    fn fixture() -> Fixture {
        let db = Database::new();
        let categories = CategoryRepository::new(db.clone());
        let products = ProductRepository::new(db.clone());

        let drinks = categories
            .create(CategoryCreate {
                name: "Drinks".to_string(),
                slug: "drinks".to_string(),
            })
            .unwrap();
        let food = categories
            .create(CategoryCreate {
                name: "Pizza".to_string(),
                slug: "pizza".to_string(),
            })
            .unwrap();

        let cola = products
            .create(ProductCreate {
                name: "Cola".to_string(),
                price: dec("2.00"),
                purchase_cost: None,
                category_id: drinks.id,
                image_url: None,
                unit: None,
                description: None,
                quantity: None,
            })
            .unwrap();
        let pizza = products
            .create(ProductCreate {
                name: "Margherita".to_string(),
                price: dec("14.00"),
                purchase_cost: None,
                category_id: food.id,
                image_url: None,
                unit: None,
                description: None,
                quantity: None,
            })
            .unwrap();

        Fixture {
            db,
            cola_id: cola.id,
            pizza_id: pizza.id,
        }
    }

    fn place_order(
        db: &Database,
        items: Vec<(String, i32, &str)>,
        status: OrderStatus,
        payment_method: Option<&str>,
    ) {
        let items = items
            .into_iter()
            .map(|(product_id, quantity, price)| OrderItemInput {
                product_id,
                quantity,
                price: dec(price),
                total: None,
            })
            .collect();
        OrderRepository::new(db.clone())
            .create_with_items(
                OrderCreate {
                    status,
                    payment_method: payment_method.map(str::to_string),
                    ..OrderCreate::default()
                },
                items,
            )
            .unwrap();
    }

    #[test]
    fn stats_ignore_non_completed_orders_but_count_lifetime_completed() {
        let f = fixture();
        let engine = ReportingEngine::new(f.db.clone());

        // One completed order far in the past (seeded directly so the
        // window can exclude it), one draft today
        f.db.write(|store| {
            let mut order = shared::models::Order {
                id: "old".to_string(),
                order_number: "1".to_string(),
                table_id: None,
                dining_option: Default::default(),
                customer_name: None,
                customer_phone: None,
                order_source: Default::default(),
                subtotal: dec("10.00"),
                discount: dec("0"),
                discount_type: Default::default(),
                total: dec("10.00"),
                status: OrderStatus::Completed,
                payment_status: Default::default(),
                payment_method: None,
                created_at: Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap(),
                completed_at: None,
            };
            store.orders.insert(order.id.clone(), order.clone());
            order.id = "draft".to_string();
            order.status = OrderStatus::Draft;
            order.created_at = Utc::now();
            store.orders.insert(order.id.clone(), order);
        });

        let today = DateWindow::resolve("today", None);
        let stats = engine.dashboard_stats(&today);
        assert_eq!(stats.today_sales, 0.0);
        assert_eq!(stats.today_orders, 0);
        // Lifetime count still sees the 2020 completed order
        assert_eq!(stats.total_orders, 1);
    }

    #[test]
    fn revenue_subtracts_purchases_and_discounts_and_expenses() {
        let f = fixture();
        place_order(
            &f.db,
            vec![(f.cola_id.clone(), 3, "2.00")],
            OrderStatus::Completed,
            Some("cash"),
        );

        PurchaseRepository::new(f.db.clone())
            .create(PurchaseCreate {
                image_url: None,
                category_id: "1".to_string(),
                item_name: "Beans".to_string(),
                quantity: dec("2"),
                unit: "Kg".to_string(),
                price: dec("1.50"),
                purchase_date: Utc::now(),
            })
            .unwrap();
        ExpenseRepository::new(f.db.clone())
            .create(ExpenseCreate {
                expense_date: Utc::now(),
                category_id: "x".to_string(),
                description: "Ice".to_string(),
                amount: dec("1.00"),
                unit: "Bag".to_string(),
                quantity: dec("1"),
                total: dec("1.00"),
            })
            .unwrap();

        let engine = ReportingEngine::new(f.db.clone());
        let stats = engine.dashboard_stats(&DateWindow::all());
        assert_eq!(stats.today_sales, 6.0);
        assert_eq!(stats.total_purchase, 3.0);
        // 6.00 - (3.00 + 0 discount) = 3.00
        assert_eq!(stats.total_revenue, 3.0);
        assert_eq!(stats.total_expenses, 1.0);
        assert_eq!(stats.profit_loss, 2.0);
    }

    #[test]
    fn category_revenue_sums_match_item_totals() {
        let f = fixture();
        place_order(
            &f.db,
            vec![
                (f.cola_id.clone(), 3, "2.00"),
                (f.pizza_id.clone(), 1, "14.00"),
            ],
            OrderStatus::Completed,
            Some("cash"),
        );
        place_order(
            &f.db,
            vec![(f.cola_id.clone(), 1, "2.00")],
            OrderStatus::Completed,
            None,
        );
        // Draft order must not contribute
        place_order(
            &f.db,
            vec![(f.pizza_id.clone(), 5, "14.00")],
            OrderStatus::Draft,
            None,
        );

        let engine = ReportingEngine::new(f.db.clone());
        let rows = engine.sales_by_category(&DateWindow::all());

        let total: f64 = rows.iter().map(|r| r.revenue).sum();
        assert_eq!(total, 22.0); // 6 + 14 + 2

        // Sorted descending by revenue
        assert_eq!(rows[0].category, "Pizza");
        assert_eq!(rows[0].revenue, 14.0);
        assert_eq!(rows[1].category, "Drinks");
        assert_eq!(rows[1].revenue, 8.0);
    }

    #[test]
    fn payment_methods_default_to_not_specified() {
        let f = fixture();
        place_order(
            &f.db,
            vec![(f.cola_id.clone(), 1, "2.00")],
            OrderStatus::Completed,
            Some("cash"),
        );
        place_order(
            &f.db,
            vec![(f.cola_id.clone(), 2, "2.00")],
            OrderStatus::Completed,
            None,
        );

        let engine = ReportingEngine::new(f.db.clone());
        let rows = engine.sales_by_payment_method(&DateWindow::all());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].payment_method, "Not specified");
        assert_eq!(rows[0].amount, 4.0);
        assert_eq!(rows[1].payment_method, "cash");
        assert_eq!(rows[1].amount, 2.0);
    }

    #[test]
    fn popular_products_caps_at_five_and_keeps_encounter_order_on_ties() {
        let db = Database::new();
        let categories = CategoryRepository::new(db.clone());
        let products = ProductRepository::new(db.clone());
        let category = categories
            .create(CategoryCreate {
                name: "Menu".to_string(),
                slug: "menu".to_string(),
            })
            .unwrap();

        // Seven products, each sold with quantity 2 in one order so every
        // entry ties; encounter order is the order's item insertion order.
        let mut ids = Vec::new();
        for n in 0..7 {
            let p = products
                .create(ProductCreate {
                    name: format!("Dish {n}"),
                    price: dec("5.00"),
                    purchase_cost: None,
                    category_id: category.id.clone(),
                    image_url: None,
                    unit: None,
                    description: None,
                    quantity: None,
                })
                .unwrap();
            ids.push(p.id);
        }
        place_order(
            &db,
            ids.iter().map(|id| (id.clone(), 2, "5.00")).collect(),
            OrderStatus::Completed,
            None,
        );

        let engine = ReportingEngine::new(db);
        let rows = engine.popular_products(&DateWindow::all());
        assert_eq!(rows.len(), 5);
        for row in &rows {
            assert_eq!(row.quantity, 2);
            assert_eq!(row.revenue, 10.0);
        }
    }

    #[test]
    fn recent_orders_newest_first_capped_at_ten() {
        let f = fixture();
        for _ in 0..12 {
            place_order(
                &f.db,
                vec![(f.cola_id.clone(), 1, "2.00")],
                OrderStatus::Completed,
                None,
            );
        }

        let engine = ReportingEngine::new(f.db.clone());
        let rows = engine.recent_orders(&DateWindow::all());
        assert_eq!(rows.len(), 10);
        for pair in rows.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
