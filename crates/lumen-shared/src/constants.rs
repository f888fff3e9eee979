/// Application name
pub const APP_NAME: &str = "Lumen";

/// Fixed latency applied to simulated authentication calls, in milliseconds
pub const LOGIN_LATENCY_MS: u64 = 800;

/// Base delay before the simulated bot reply, in milliseconds
pub const REPLY_DELAY_BASE_MS: u64 = 1000;

/// Upper bound of the random jitter added to the reply delay, in milliseconds
pub const REPLY_DELAY_JITTER_MS: u64 = 2000;

/// Local-storage key holding the current signed-in profile (password stripped)
pub const KEY_CURRENT_USER: &str = "user";

/// Local-storage key holding the list of registered accounts
pub const KEY_REGISTERED_USERS: &str = "registeredUsers";

/// Local-storage key holding the chat transcript
pub const KEY_CHAT_MESSAGES: &str = "chatMessages";

/// Domain used for identities fabricated by the third-party login flow
pub const GOOGLE_EMAIL_DOMAIN: &str = "gmail.com";
