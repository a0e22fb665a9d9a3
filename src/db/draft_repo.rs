use rusqlite::{params, Connection};

use crate::error::ComedorResult;
use crate::model::OrderDraft;

/// Storage key for the current draft list. Must stay in sync with the key
/// the web client uses in localStorage.
pub const STORAGE_KEY: &str = "currentOrders";

/// Load the draft list. A missing key is an empty list, not an error.
pub fn load(conn: &Connection) -> ComedorResult<Vec<OrderDraft>> {
    let mut stmt = conn.prepare("SELECT value FROM local_store WHERE key = ?1")?;

    let result = stmt.query_row(params![STORAGE_KEY], |row| {
        let json: String = row.get(0)?;
        Ok(json)
    });

    match result {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Persist the draft list. A full write replaces prior contents entirely;
/// there is no merge or versioning.
pub fn save(conn: &Connection, drafts: &[OrderDraft]) -> ComedorResult<()> {
    let json = serde_json::to_string(drafts)?;
    conn.execute(
        "REPLACE INTO local_store (key, value) VALUES (?1, ?2)",
        params![STORAGE_KEY, json],
    )?;
    Ok(())
}

/// Drop the stored draft list, e.g. after an order has been submitted.
pub fn clear(conn: &Connection) -> ComedorResult<()> {
    conn.execute(
        "DELETE FROM local_store WHERE key = ?1",
        params![STORAGE_KEY],
    )?;
    Ok(())
}
