use crate::error::{Result, StoreError};
use crate::query::OrderQuery;
use macfield_core::checkout::MetaEntry;
use macfield_core::domain::{Order, OrderId};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::str::FromStr;

const ORDER_COLUMNS: &str = "id, billing_name, billing_email, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct OrderNew {
    pub billing_name: String,
    pub billing_email: Option<String>,
    pub meta: Vec<MetaEntry>,
}

pub struct OrdersRepo<'a> {
    conn: &'a Connection,
}

impl<'a> OrdersRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, now_utc: i64, input: OrderNew) -> Result<Order> {
        let order = Order {
            id: OrderId::new(),
            billing_name: input.billing_name,
            billing_email: input.billing_email,
            created_at: now_utc,
            updated_at: now_utc,
        };
        order.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO orders (id, billing_name, billing_email, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                order.id.to_string(),
                order.billing_name,
                order.billing_email,
                order.created_at,
                order.updated_at
            ],
        )?;
        for entry in &input.meta {
            upsert_meta(&tx, &order.id, entry)?;
        }
        tx.commit()?;
        Ok(order)
    }

    pub fn get(&self, id: &OrderId) -> Result<Order> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM orders WHERE id = ?1;", ORDER_COLUMNS),
                params![id.to_string()],
                read_order_row,
            )
            .optional()?;
        match row {
            Some(raw) => raw.into_order(),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    pub fn list_all(&self) -> Result<Vec<Order>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM orders ORDER BY created_at DESC, id;",
            ORDER_COLUMNS
        ))?;
        let rows = stmt.query_map([], read_order_row)?;
        collect_orders(rows)
    }

    pub fn search(&self, query: &OrderQuery) -> Result<Vec<Order>> {
        let built = query.to_sql();
        let mut stmt = self.conn.prepare(&built.sql)?;
        let rows = stmt.query_map(params_from_iter(built.params), read_order_row)?;
        collect_orders(rows)
    }

    pub fn get_meta(&self, id: &OrderId, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT meta_value FROM order_meta WHERE order_id = ?1 AND meta_key = ?2;",
                params![id.to_string(), key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn list_meta(&self, id: &OrderId) -> Result<Vec<MetaEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT meta_key, meta_value FROM order_meta WHERE order_id = ?1 ORDER BY meta_key;",
        )?;
        let rows = stmt.query_map(params![id.to_string()], |row| {
            Ok(MetaEntry {
                key: row.get(0)?,
                value: row.get(1)?,
            })
        })?;
        let mut entries = Vec::new();
        for entry in rows {
            entries.push(entry?);
        }
        Ok(entries)
    }

    /// Admin-edit save path: upsert the metadata entry and bump the order's
    /// updated_at. Errors if the order does not exist.
    pub fn update_meta(&self, now_utc: i64, id: &OrderId, entry: &MetaEntry) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let updated = tx.execute(
            "UPDATE orders SET updated_at = ?1 WHERE id = ?2;",
            params![now_utc, id.to_string()],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        upsert_meta(&tx, id, entry)?;
        tx.commit()?;
        Ok(())
    }
}

fn upsert_meta(conn: &Connection, id: &OrderId, entry: &MetaEntry) -> Result<()> {
    conn.execute(
        "INSERT INTO order_meta (order_id, meta_key, meta_value) VALUES (?1, ?2, ?3) \
         ON CONFLICT (order_id, meta_key) DO UPDATE SET meta_value = excluded.meta_value;",
        params![id.to_string(), entry.key, entry.value],
    )?;
    Ok(())
}

struct OrderRow {
    id: String,
    billing_name: String,
    billing_email: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl OrderRow {
    fn into_order(self) -> Result<Order> {
        let id = OrderId::from_str(&self.id).map_err(|_| StoreError::InvalidId(self.id.clone()))?;
        Ok(Order {
            id,
            billing_name: self.billing_name,
            billing_email: self.billing_email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn read_order_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<OrderRow> {
    Ok(OrderRow {
        id: row.get(0)?,
        billing_name: row.get(1)?,
        billing_email: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

fn collect_orders(
    rows: impl Iterator<Item = rusqlite::Result<OrderRow>>,
) -> Result<Vec<Order>> {
    let mut orders = Vec::new();
    for row in rows {
        orders.push(row?.into_order()?);
    }
    Ok(orders)
}
