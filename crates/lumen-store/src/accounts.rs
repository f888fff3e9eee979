//! Accessors for the persisted identity entries: the current signed-in
//! profile and the registered-accounts list.

use lumen_shared::constants::{KEY_CURRENT_USER, KEY_REGISTERED_USERS};

use crate::database::Database;
use crate::error::Result;
use crate::models::{Account, Profile};

impl Database {
    // ------------------------------------------------------------------
    // Current profile slot
    // ------------------------------------------------------------------

    /// Load the persisted current profile, if a session exists.
    pub fn load_session(&self) -> Result<Option<Profile>> {
        match self.get_item(KEY_CURRENT_USER)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Persist `profile` as the current session.
    pub fn save_session(&self, profile: &Profile) -> Result<()> {
        let json = serde_json::to_string(profile)?;
        self.set_item(KEY_CURRENT_USER, &json)
    }

    /// Remove the persisted session.  Returns `true` if one existed.
    pub fn clear_session(&self) -> Result<bool> {
        self.remove_item(KEY_CURRENT_USER)
    }

    // ------------------------------------------------------------------
    // Registered accounts
    // ------------------------------------------------------------------

    /// Load all locally registered accounts.  An absent entry is an empty
    /// list.
    pub fn load_accounts(&self) -> Result<Vec<Account>> {
        match self.get_item(KEY_REGISTERED_USERS)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the full registered-accounts list.
    pub fn save_accounts(&self, accounts: &[Account]) -> Result<()> {
        let json = serde_json::to_string(accounts)?;
        self.set_item(KEY_REGISTERED_USERS, &json)
    }
}

#[cfg(test)]
mod tests {
    use lumen_shared::Role;

    use crate::models::Account;
    use crate::Database;

    fn account(email: &str) -> Account {
        Account {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Someone".into(),
            email: email.into(),
            role: Role::User,
            password: "pw".into(),
        }
    }

    #[test]
    fn session_slot_round_trip() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.load_session().unwrap(), None);

        let profile = account("a@example.com").profile();
        db.save_session(&profile).unwrap();
        assert_eq!(db.load_session().unwrap(), Some(profile));

        assert!(db.clear_session().unwrap());
        assert!(!db.clear_session().unwrap());
        assert_eq!(db.load_session().unwrap(), None);
    }

    #[test]
    fn accounts_round_trip() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.load_accounts().unwrap().is_empty());

        let accounts = vec![account("a@example.com"), account("b@example.com")];
        db.save_accounts(&accounts).unwrap();
        assert_eq!(db.load_accounts().unwrap(), accounts);
    }

    #[test]
    fn corrupt_session_is_an_error_not_a_panic() {
        let db = Database::open_in_memory().unwrap();
        db.set_item("user", "not json").unwrap();
        assert!(db.load_session().is_err());
    }
}
