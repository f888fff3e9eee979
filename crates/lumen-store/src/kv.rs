//! String-keyed get/set/remove primitives over the `local_storage` table.

use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Fetch the raw value stored under `key`, if any.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn()
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO local_storage (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove the entry under `key`.  Returns `true` if a row was deleted.
    pub fn remove_item(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn set_get_remove() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.get_item("missing").unwrap(), None);

        db.set_item("a", "1").unwrap();
        assert_eq!(db.get_item("a").unwrap().as_deref(), Some("1"));

        db.set_item("a", "2").unwrap();
        assert_eq!(db.get_item("a").unwrap().as_deref(), Some("2"));

        assert!(db.remove_item("a").unwrap());
        assert!(!db.remove_item("a").unwrap());
        assert_eq!(db.get_item("a").unwrap(), None);
    }
}
