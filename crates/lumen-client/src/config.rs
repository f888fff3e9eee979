//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the client can start with zero
//! configuration; tests override the latencies to zero.

use std::time::Duration;

use lumen_shared::constants::{LOGIN_LATENCY_MS, REPLY_DELAY_BASE_MS, REPLY_DELAY_JITTER_MS};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Fixed latency applied to simulated authentication calls.
    /// Env: `LUMEN_LOGIN_LATENCY_MS`
    /// Default: `800`
    pub login_latency: Duration,

    /// Base delay before the simulated bot reply.
    /// Env: `LUMEN_REPLY_DELAY_BASE_MS`
    /// Default: `1000`
    pub reply_delay_base: Duration,

    /// Upper bound of the random jitter added to the reply delay.
    /// Env: `LUMEN_REPLY_DELAY_JITTER_MS`
    /// Default: `2000`
    pub reply_delay_jitter: Duration,
}

impl ClientConfig {
    /// Build a configuration from the environment, falling back to
    /// defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login_latency: env_millis("LUMEN_LOGIN_LATENCY_MS", defaults.login_latency),
            reply_delay_base: env_millis("LUMEN_REPLY_DELAY_BASE_MS", defaults.reply_delay_base),
            reply_delay_jitter: env_millis(
                "LUMEN_REPLY_DELAY_JITTER_MS",
                defaults.reply_delay_jitter,
            ),
        }
    }

    /// A configuration with all simulated latencies removed.  Used by tests.
    pub fn instant() -> Self {
        Self {
            login_latency: Duration::ZERO,
            reply_delay_base: Duration::ZERO,
            reply_delay_jitter: Duration::ZERO,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_latency: Duration::from_millis(LOGIN_LATENCY_MS),
            reply_delay_base: Duration::from_millis(REPLY_DELAY_BASE_MS),
            reply_delay_jitter: Duration::from_millis(REPLY_DELAY_JITTER_MS),
        }
    }
}

fn env_millis(var: &str, default: Duration) -> Duration {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
