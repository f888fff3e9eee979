use thiserror::Error;

/// Errors produced by the client containers.
///
/// Mock-flow failures (wrong credentials, duplicate email) are not errors:
/// those resolve to `Ok(false)` plus a notice on the event bus. This type
/// covers infrastructure failures only.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Local storage failure.
    #[error("Store error: {0}")]
    Store(#[from] lumen_store::StoreError),

    /// A shared-state mutex was poisoned by a panicking holder.
    #[error("State lock poisoned")]
    Lock,

    /// No profile is currently signed in.
    #[error("Not signed in")]
    NotAuthenticated,

    /// The current profile lacks the administrator role.
    #[error("Administrator role required")]
    Forbidden,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
