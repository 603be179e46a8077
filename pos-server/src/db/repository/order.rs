//! Order Repository
//!
//! Owns the order lifecycle: creation with line items (one unit of work
//! covering order + items + table occupancy), status transitions through
//! the state machine, and cascade deletion of items.

use chrono::Utc;
use shared::models::{
    Order, OrderCreate, OrderItem, OrderItemInput, OrderItemWithProduct, OrderUpdate,
    OrderWithItems,
};
use shared::order::{OrderSource, OrderStatus};

use super::{RepoError, RepoResult};
use crate::db::{Database, Store, new_id};
use crate::orders::money;

#[derive(Clone)]
pub struct OrderRepository {
    db: Database,
}

impl OrderRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<Order> {
        self.db.read(|store| store.orders.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<Order> {
        self.db.read(|store| store.orders.get(id).cloned())
    }

    pub fn find_by_id_with_items(&self, id: &str) -> Option<OrderWithItems> {
        self.db.read(|store| {
            store
                .orders
                .get(id)
                .map(|order| join_items(store, order.clone()))
        })
    }

    /// Draft orders with resolved items, for the draft list view
    pub fn find_drafts(&self) -> Vec<OrderWithItems> {
        self.db.read(|store| {
            store
                .orders
                .values()
                .filter(|o| o.status == OrderStatus::Draft)
                .map(|o| join_items(store, o.clone()))
                .collect()
        })
    }

    /// QR queue: orders from the QR flow still awaiting staff acceptance
    pub fn find_qr_pending(&self) -> Vec<OrderWithItems> {
        self.db.read(|store| {
            store
                .orders
                .values()
                .filter(|o| o.order_source == OrderSource::Qr && o.status == OrderStatus::QrPending)
                .map(|o| join_items(store, o.clone()))
                .collect()
        })
    }

    pub fn find_completed(&self) -> Vec<Order> {
        self.db.read(|store| {
            store
                .orders
                .values()
                .filter(|o| o.status == OrderStatus::Completed)
                .cloned()
                .collect()
        })
    }

    /// Line items of an order joined with their products.
    ///
    /// Items whose product no longer resolves are dropped from the view;
    /// they were accepted at write time and stay in the store.
    pub fn items_with_products(&self, order_id: &str) -> Vec<OrderItemWithProduct> {
        self.db
            .read(|store| join_order_items(store, order_id))
    }

    /// Create an order together with its line items.
    ///
    /// One unit of work: order number assignment, item rows, and table
    /// occupancy all commit or none do. Item totals, the subtotal and the
    /// total are recomputed here from the submitted prices and the
    /// discount; client-sent totals are not trusted.
    ///
    /// Items may reference unknown product ids — the join views drop
    /// them. A table id that resolves flips that table to "occupied";
    /// one that doesn't is ignored. Stock quantities are not touched.
    pub fn create_with_items(
        &self,
        data: OrderCreate,
        items: Vec<OrderItemInput>,
    ) -> RepoResult<OrderWithItems> {
        self.db.transaction(|store| {
            let totals = money::order_totals(&items, data.discount, data.discount_type);
            let now = Utc::now();

            let order = Order {
                id: new_id(),
                order_number: store.next_order_number(),
                table_id: data.table_id.clone(),
                dining_option: data.dining_option,
                customer_name: data.customer_name,
                customer_phone: data.customer_phone,
                order_source: data.order_source,
                subtotal: totals.subtotal,
                discount: data.discount,
                discount_type: data.discount_type,
                total: totals.total,
                status: data.status,
                payment_status: data.payment_status,
                payment_method: data.payment_method,
                created_at: now,
                completed_at: (data.status == OrderStatus::Completed).then_some(now),
            };
            store.orders.insert(order.id.clone(), order.clone());

            for item in &items {
                let row = OrderItem {
                    id: new_id(),
                    order_id: order.id.clone(),
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                    price: item.price,
                    total: money::line_total(item.price, item.quantity),
                };
                store.order_items.insert(row.id.clone(), row);
            }

            // 桌台占用
            if let Some(table_id) = &data.table_id
                && let Some(table) = store.tables.get_mut(table_id)
            {
                table.status = "occupied".to_string();
            }

            Ok(join_items(store, order))
        })
    }

    /// Shallow merge update.
    ///
    /// A status change in the payload goes through the state machine;
    /// the total is recomputed from the stored subtotal when the
    /// discount fields change.
    pub fn update(&self, id: &str, data: OrderUpdate) -> RepoResult<Order> {
        self.db.write(|store| {
            let order = store
                .orders
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

            if let Some(next) = data.status {
                order.status = order.status.transition_to(next)?;
                if next == OrderStatus::Completed {
                    order.completed_at = Some(Utc::now());
                }
            }

            if let Some(table_id) = data.table_id {
                order.table_id = Some(table_id);
            }
            if let Some(dining_option) = data.dining_option {
                order.dining_option = dining_option;
            }
            if let Some(customer_name) = data.customer_name {
                order.customer_name = Some(customer_name);
            }
            if let Some(customer_phone) = data.customer_phone {
                order.customer_phone = Some(customer_phone);
            }
            if let Some(payment_status) = data.payment_status {
                order.payment_status = payment_status;
            }
            if let Some(payment_method) = data.payment_method {
                order.payment_method = Some(payment_method);
            }

            if data.discount.is_some() || data.discount_type.is_some() {
                if let Some(discount) = data.discount {
                    order.discount = discount;
                }
                if let Some(discount_type) = data.discount_type {
                    order.discount_type = discount_type;
                }
                let effective =
                    money::effective_discount(order.subtotal, order.discount, order.discount_type);
                order.total = order.subtotal - effective;
            }

            Ok(order.clone())
        })
    }

    /// Status transition through the state machine.
    ///
    /// Rejects anything outside draft → completed/cancelled,
    /// qr-pending → pending/cancelled, pending → confirmed/completed/
    /// cancelled, confirmed → completed/cancelled. Completion stamps
    /// `completed_at`.
    pub fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        self.db.write(|store| {
            let order = store
                .orders
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

            order.status = order.status.transition_to(status)?;
            if status == OrderStatus::Completed {
                order.completed_at = Some(Utc::now());
            }
            Ok(order.clone())
        })
    }

    /// Delete an order and cascade to its line items.
    ///
    /// The referenced table keeps its "occupied" status; nothing reverts
    /// it here.
    pub fn delete(&self, id: &str) -> RepoResult<bool> {
        self.db.transaction(|store| {
            if store.orders.remove(id).is_none() {
                return Ok(false);
            }
            store.order_items.retain(|_, item| item.order_id != id);
            Ok(true)
        })
    }
}

fn join_order_items(store: &Store, order_id: &str) -> Vec<OrderItemWithProduct> {
    store
        .order_items
        .values()
        .filter(|item| item.order_id == order_id)
        .filter_map(|item| {
            store.products.get(&item.product_id).map(|product| OrderItemWithProduct {
                item: item.clone(),
                product: product.clone(),
            })
        })
        .collect()
}

fn join_items(store: &Store, order: Order) -> OrderWithItems {
    let items = join_order_items(store, &order.id);
    OrderWithItems { order, items }
}
