//! Session container: owns the current signed-in profile.
//!
//! All authentication is simulated client-side against a fixed built-in
//! administrator list plus the locally registered accounts. Mock-flow
//! failures (wrong credentials, duplicate email) resolve to `Ok(false)`
//! and a notice on the event bus; nothing in here aborts the UI.

use std::sync::{Arc, Mutex};

use rand::Rng;
use tracing::info;
use uuid::Uuid;

use lumen_shared::constants::GOOGLE_EMAIL_DOMAIN;
use lumen_shared::Role;
use lumen_store::{Account, Database, Profile};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::events::{ClientEvent, EventBus, NoticeSeverity};

/// Built-in administrator accounts.  In a real application these would
/// live in a backend database.
fn builtin_admins() -> Vec<Account> {
    vec![
        Account {
            id: "1".to_string(),
            name: "Admin".to_string(),
            email: "admin@lumen.app".to_string(),
            role: Role::Admin,
            password: "admin123".to_string(),
        },
        Account {
            id: "2".to_string(),
            name: "Super Admin".to_string(),
            email: "superadmin@lumen.app".to_string(),
            role: Role::Admin,
            password: "super123".to_string(),
        },
    ]
}

/// Cloneable handle to the session state.
///
/// Constructed once at application start; the persisted profile (if any)
/// is rehydrated during construction.
#[derive(Clone)]
pub struct Session {
    store: Arc<Mutex<Database>>,
    bus: EventBus,
    config: ClientConfig,
    current: Arc<Mutex<Option<Profile>>>,
}

impl Session {
    pub fn new(store: Arc<Mutex<Database>>, bus: EventBus, config: ClientConfig) -> Result<Self> {
        let persisted = {
            let db = store.lock().map_err(|_| ClientError::Lock)?;
            db.load_session()?
        };
        if let Some(ref profile) = persisted {
            info!(email = %profile.email, "restored persisted session");
        }
        Ok(Self {
            store,
            bus,
            config,
            current: Arc::new(Mutex::new(persisted)),
        })
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// The current signed-in profile, if any.
    pub fn current(&self) -> Result<Option<Profile>> {
        let guard = self.current.lock().map_err(|_| ClientError::Lock)?;
        Ok(guard.clone())
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.current()?.is_some())
    }

    /// Guard for admin-only surfaces (the dashboard routes).
    pub fn require_admin(&self) -> Result<Profile> {
        let profile = self.current()?.ok_or(ClientError::NotAuthenticated)?;
        if !profile.role.is_admin() {
            return Err(ClientError::Forbidden);
        }
        Ok(profile)
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Sign in with email and password.
    ///
    /// Resolves after the fixed simulated latency. On a match the
    /// password-stripped profile becomes current and is persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
        if email.trim().is_empty() || password.is_empty() {
            return Ok(false);
        }

        tokio::time::sleep(self.config.login_latency).await;

        let candidate = self
            .known_accounts()?
            .into_iter()
            .find(|a| a.email == email && a.password == password);

        match candidate {
            Some(account) => {
                let profile = account.profile();
                self.establish(profile.clone())?;
                info!(email = %profile.email, role = ?profile.role, "login succeeded");
                self.bus.notice(
                    NoticeSeverity::Success,
                    "Welcome!",
                    &format!("Signed in as {}", profile.name),
                );
                Ok(true)
            }
            None => {
                info!(email, "login failed");
                self.bus.notice(
                    NoticeSeverity::Error,
                    "Login failed",
                    "Incorrect credentials",
                );
                Ok(false)
            }
        }
    }

    /// Register a new account with role `user` and sign it in.
    ///
    /// A duplicate email (built-in or registered) resolves `false` without
    /// touching the stored list.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<bool> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Ok(false);
        }

        if self.email_is_known(email)? {
            self.bus.notice(
                NoticeSeverity::Error,
                "Registration failed",
                "An account with this email already exists",
            );
            return Ok(false);
        }

        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
            password: password.to_string(),
        };
        self.store_account(&account)?;
        let profile = account.profile();
        self.establish(profile.clone())?;
        info!(email = %profile.email, "registered new account");
        self.bus.notice(
            NoticeSeverity::Success,
            "Account created",
            &format!("Welcome, {}", profile.name),
        );
        Ok(true)
    }

    /// Third-party login.  Unconditionally succeeds with a fabricated
    /// identity carrying a random email suffix.
    pub async fn login_with_google(&self) -> Result<bool> {
        tokio::time::sleep(self.config.login_latency).await;

        let suffix: u32 = rand::thread_rng().gen_range(10_000..100_000);
        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: "Google User".to_string(),
            email: format!("user{suffix}@{GOOGLE_EMAIL_DOMAIN}"),
            role: Role::User,
            // Third-party identities never authenticate by password; an
            // unguessable token keeps the stored record shape uniform.
            password: Uuid::new_v4().to_string(),
        };
        self.store_account(&account)?;
        let profile = account.profile();
        self.establish(profile.clone())?;
        info!(email = %profile.email, "google login succeeded");
        self.bus.notice(
            NoticeSeverity::Success,
            "Welcome!",
            &format!("Signed in as {}", profile.email),
        );
        Ok(true)
    }

    /// Request a password reset.  Succeeds (notification only, no stored
    /// mutation) when the email is known.
    pub async fn reset_password(&self, email: &str) -> Result<bool> {
        if email.trim().is_empty() {
            return Ok(false);
        }

        if self.email_is_known(email)? {
            self.bus.notice(
                NoticeSeverity::Success,
                "Password reset",
                "Check your inbox for reset instructions",
            );
            Ok(true)
        } else {
            self.bus.notice(
                NoticeSeverity::Error,
                "Password reset failed",
                "No account found for this email",
            );
            Ok(false)
        }
    }

    /// Sign out: clears the current profile and its persisted slot.  The
    /// emitted event sends the presentation layer back to the login view.
    pub fn logout(&self) -> Result<()> {
        {
            let mut guard = self.current.lock().map_err(|_| ClientError::Lock)?;
            *guard = None;
        }
        {
            let db = self.store.lock().map_err(|_| ClientError::Lock)?;
            db.clear_session()?;
        }
        info!("logged out");
        self.bus
            .notice(NoticeSeverity::Info, "Signed out", "You have been signed out");
        self.bus.emit(ClientEvent::LoggedOut);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Built-in administrators unioned with locally registered accounts.
    fn known_accounts(&self) -> Result<Vec<Account>> {
        let stored = {
            let db = self.store.lock().map_err(|_| ClientError::Lock)?;
            db.load_accounts()?
        };
        let mut all = builtin_admins();
        all.extend(stored);
        Ok(all)
    }

    fn email_is_known(&self, email: &str) -> Result<bool> {
        Ok(self.known_accounts()?.iter().any(|a| a.email == email))
    }

    /// Append an account to the registered list and persist it.
    fn store_account(&self, account: &Account) -> Result<()> {
        let db = self.store.lock().map_err(|_| ClientError::Lock)?;
        let mut accounts = db.load_accounts()?;
        accounts.push(account.clone());
        db.save_accounts(&accounts)?;
        Ok(())
    }

    /// Make `profile` current, persist it, and notify subscribers.
    fn establish(&self, profile: Profile) -> Result<()> {
        {
            let db = self.store.lock().map_err(|_| ClientError::Lock)?;
            db.save_session(&profile)?;
        }
        {
            let mut guard = self.current.lock().map_err(|_| ClientError::Lock)?;
            *guard = Some(profile);
        }
        self.bus.emit(ClientEvent::SessionChanged);
        Ok(())
    }
}
