//! Order Sink persistence: customers deduplicated by phone, orders and
//! their repriced lines stored in SQLite.

use rusqlite::{params, Connection, OptionalExtension};
use sa7abox_model::{Nutrition, SelectedOptions};
use std::path::Path;
use std::sync::Mutex;

#[derive(Debug)]
pub struct OrderStoreError(pub String);

impl std::fmt::Display for OrderStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for OrderStoreError {}

impl From<rusqlite::Error> for OrderStoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self(err.to_string())
    }
}

impl From<serde_json::Error> for OrderStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

/// One persisted order line, prices and nutrition recomputed server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub item_id: String,
    pub name_key: String,
    pub quantity: u32,
    pub unit_price_tnd: f64,
    pub line_total_tnd: f64,
    pub nutrition: Nutrition,
    pub selected_options: SelectedOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_location: String,
    pub total_tnd: f64,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredOrder {
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_location: String,
    pub status: String,
    pub total_tnd: f64,
    pub lines: Vec<OrderLine>,
}

pub struct OrderStore {
    conn: Mutex<Connection>,
}

impl OrderStore {
    pub fn open(path: &Path) -> Result<Self, OrderStoreError> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, OrderStoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), OrderStoreError> {
        let conn = self.lock()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS customers (
                 id          INTEGER PRIMARY KEY AUTOINCREMENT,
                 name        TEXT NOT NULL,
                 phone       TEXT NOT NULL UNIQUE,
                 location    TEXT NOT NULL,
                 created_at  TEXT NOT NULL DEFAULT (datetime('now'))
             );
             CREATE TABLE IF NOT EXISTS orders (
                 id            INTEGER PRIMARY KEY AUTOINCREMENT,
                 order_number  TEXT NOT NULL UNIQUE,
                 customer_id   INTEGER NOT NULL REFERENCES customers(id),
                 status        TEXT NOT NULL DEFAULT 'pending',
                 total_tnd     REAL NOT NULL,
                 created_at    TEXT NOT NULL DEFAULT (datetime('now'))
             );
             CREATE TABLE IF NOT EXISTS order_items (
                 id               INTEGER PRIMARY KEY AUTOINCREMENT,
                 order_id         INTEGER NOT NULL REFERENCES orders(id),
                 item_id          TEXT NOT NULL,
                 name_key         TEXT NOT NULL,
                 quantity         INTEGER NOT NULL,
                 unit_price_tnd   REAL NOT NULL,
                 line_total_tnd   REAL NOT NULL,
                 calories         REAL NOT NULL,
                 protein          REAL NOT NULL,
                 carbs            REAL,
                 fat              REAL,
                 fiber            REAL NOT NULL,
                 selected_options TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS bot_messages (
                 id          INTEGER PRIMARY KEY AUTOINCREMENT,
                 order_id    INTEGER NOT NULL REFERENCES orders(id),
                 chat_id     TEXT NOT NULL,
                 message_id  INTEGER NOT NULL
             );",
        )?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, OrderStoreError> {
        self.conn
            .lock()
            .map_err(|_| OrderStoreError("order store lock poisoned".to_string()))
    }

    /// Persists the order and its lines; the customer row is upserted by
    /// phone so repeat orders keep the latest name and location.
    pub fn insert_order(&self, order: &NewOrder) -> Result<i64, OrderStoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO customers (name, phone, location) VALUES (?1, ?2, ?3)
             ON CONFLICT(phone) DO UPDATE SET name = excluded.name, location = excluded.location",
            params![
                order.customer_name,
                order.customer_phone,
                order.customer_location
            ],
        )?;
        let customer_id: i64 = tx.query_row(
            "SELECT id FROM customers WHERE phone = ?1",
            params![order.customer_phone],
            |row| row.get(0),
        )?;

        tx.execute(
            "INSERT INTO orders (order_number, customer_id, total_tnd) VALUES (?1, ?2, ?3)",
            params![order.order_number, customer_id, order.total_tnd],
        )?;
        let order_id = tx.last_insert_rowid();

        for line in &order.lines {
            let options_json = serde_json::to_string(&line.selected_options)?;
            tx.execute(
                "INSERT INTO order_items (order_id, item_id, name_key, quantity,
                     unit_price_tnd, line_total_tnd, calories, protein, carbs, fat,
                     fiber, selected_options)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    order_id,
                    line.item_id,
                    line.name_key,
                    line.quantity,
                    line.unit_price_tnd,
                    line.line_total_tnd,
                    line.nutrition.calories,
                    line.nutrition.protein,
                    line.nutrition.carbs,
                    line.nutrition.fat,
                    line.nutrition.fiber,
                    options_json,
                ],
            )?;
        }

        tx.commit()?;
        Ok(order_id)
    }

    /// Remembers where the order was relayed so the bot service can edit
    /// the message when the status changes.
    pub fn record_bot_message(
        &self,
        order_id: i64,
        chat_id: &str,
        message_id: i64,
    ) -> Result<(), OrderStoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO bot_messages (order_id, chat_id, message_id) VALUES (?1, ?2, ?3)",
            params![order_id, chat_id, message_id],
        )?;
        Ok(())
    }

    pub fn find_by_order_number(
        &self,
        order_number: &str,
    ) -> Result<Option<StoredOrder>, OrderStoreError> {
        let conn = self.lock()?;
        let header = conn
            .query_row(
                "SELECT o.id, o.status, o.total_tnd, c.name, c.phone, c.location
                 FROM orders o JOIN customers c ON c.id = o.customer_id
                 WHERE o.order_number = ?1",
                params![order_number],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, f64>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                },
            )
            .optional()?;
        let Some((order_id, status, total_tnd, name, phone, location)) = header else {
            return Ok(None);
        };

        let mut stmt = conn.prepare(
            "SELECT item_id, name_key, quantity, unit_price_tnd, line_total_tnd,
                    calories, protein, carbs, fat, fiber, selected_options
             FROM order_items WHERE order_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![order_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, f64>(5)?,
                row.get::<_, f64>(6)?,
                row.get::<_, Option<f64>>(7)?,
                row.get::<_, Option<f64>>(8)?,
                row.get::<_, f64>(9)?,
                row.get::<_, String>(10)?,
            ))
        })?;

        let mut lines = Vec::new();
        for row in rows {
            let (
                item_id,
                name_key,
                quantity,
                unit_price_tnd,
                line_total_tnd,
                calories,
                protein,
                carbs,
                fat,
                fiber,
                options_json,
            ) = row?;
            lines.push(OrderLine {
                item_id,
                name_key,
                quantity,
                unit_price_tnd,
                line_total_tnd,
                nutrition: Nutrition {
                    calories,
                    protein,
                    carbs,
                    fat,
                    fiber,
                },
                selected_options: serde_json::from_str(&options_json)?,
            });
        }

        Ok(Some(StoredOrder {
            order_number: order_number.to_string(),
            customer_name: name,
            customer_phone: phone,
            customer_location: location,
            status,
            total_tnd,
            lines,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{NewOrder, OrderLine, OrderStore};
    use sa7abox_model::{Nutrition, SelectedOptions};

    fn line(item_id: &str, quantity: u32, unit: f64) -> OrderLine {
        OrderLine {
            item_id: item_id.to_string(),
            name_key: format!("menu.items.{item_id}.name"),
            quantity,
            unit_price_tnd: unit,
            line_total_tnd: unit * f64::from(quantity),
            nutrition: Nutrition {
                calories: 585.0,
                protein: 75.0,
                carbs: Some(51.0),
                fat: Some(8.0),
                fiber: 6.0,
            },
            selected_options: SelectedOptions::default(),
        }
    }

    fn order(number: &str, phone: &str) -> NewOrder {
        NewOrder {
            order_number: number.to_string(),
            customer_name: "Amine".to_string(),
            customer_phone: phone.to_string(),
            customer_location: "La Marsa".to_string(),
            total_tnd: 20.0,
            lines: vec![line("supercut", 2, 10.0)],
        }
    }

    #[test]
    fn insert_then_fetch_round_trips_lines() {
        let store = OrderStore::open_in_memory().expect("open");
        store
            .insert_order(&order("SA7A-111111", "+21620111111"))
            .expect("insert");

        let stored = store
            .find_by_order_number("SA7A-111111")
            .expect("query")
            .expect("present");
        assert_eq!(stored.status, "pending");
        assert_eq!(stored.total_tnd, 20.0);
        assert_eq!(stored.lines.len(), 1);
        assert_eq!(stored.lines[0].item_id, "supercut");
        assert_eq!(stored.lines[0].nutrition.carbs, Some(51.0));
    }

    #[test]
    fn repeat_phone_upserts_the_customer() {
        let store = OrderStore::open_in_memory().expect("open");
        store
            .insert_order(&order("SA7A-111111", "+21620111111"))
            .expect("first");

        let mut second = order("SA7A-222222", "+21620111111");
        second.customer_name = "Amine B".to_string();
        second.customer_location = "Carthage".to_string();
        store.insert_order(&second).expect("second");

        let stored = store
            .find_by_order_number("SA7A-111111")
            .expect("query")
            .expect("present");
        assert_eq!(stored.customer_name, "Amine B");
        assert_eq!(stored.customer_location, "Carthage");
    }

    #[test]
    fn unknown_order_number_is_none() {
        let store = OrderStore::open_in_memory().expect("open");
        assert!(store
            .find_by_order_number("SA7A-000000")
            .expect("query")
            .is_none());
    }
}
