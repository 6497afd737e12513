//! Signed session marker stored in the admin cookie.
//!
//! The marker is an HMAC-SHA256 blob over its own expiry timestamp:
//! `"{exp_unix}.{mac_hex}"`. Checking a session never touches the store --
//! it recomputes the MAC and compares the expiry against the clock, so a
//! credential rotation does not retroactively invalidate an already-issued
//! session before its natural expiry.

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "admin_session";

/// Absolute session lifetime: 24 hours from issuance.
pub const SESSION_LIFETIME_HOURS: i64 = 24;

/// Configuration for session marker signing.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify session markers.
    pub secret: String,
}

impl SessionConfig {
    /// Load session configuration from the environment.
    ///
    /// Uses `SESSION_SECRET` when set; otherwise generates a random secret
    /// for this process, which means sessions do not survive a restart.
    pub fn from_env() -> Self {
        let secret = match std::env::var("SESSION_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!(
                    "SESSION_SECRET not set; using a process-local random secret \
                     (sessions will not survive a restart)"
                );
                let mut bytes = [0u8; 32];
                rand::rng().fill_bytes(&mut bytes);
                hex_encode(&bytes)
            }
        };
        Self { secret }
    }
}

/// Issue a session marker expiring [`SESSION_LIFETIME_HOURS`] from now.
pub fn issue_token(config: &SessionConfig) -> String {
    let exp = chrono::Utc::now().timestamp() + SESSION_LIFETIME_HOURS * 3600;
    token_for_expiry(config, exp)
}

/// Build the marker string for an explicit expiry. Split out so tests can
/// forge expired-but-correctly-signed markers.
pub fn token_for_expiry(config: &SessionConfig, exp_unix: i64) -> String {
    format!("{exp_unix}.{}", sign(&config.secret, exp_unix))
}

/// Check a session marker: well-formed, MAC valid, and unexpired.
///
/// The MAC comparison goes through [`Mac::verify_slice`], which is
/// constant-time.
pub fn verify_token(config: &SessionConfig, token: &str) -> bool {
    let Some((exp_str, mac_hex)) = token.split_once('.') else {
        return false;
    };
    let Ok(exp) = exp_str.parse::<i64>() else {
        return false;
    };
    if exp <= chrono::Utc::now().timestamp() {
        return false;
    }
    let Some(mac_bytes) = hex_decode(mac_hex) else {
        return false;
    };
    mac_for(&config.secret, exp).verify_slice(&mac_bytes).is_ok()
}

fn mac_for(secret: &str, exp_unix: i64) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(exp_unix.to_string().as_bytes());
    mac
}

fn sign(secret: &str, exp_unix: i64) -> String {
    hex_encode(&mac_for(secret, exp_unix).finalize().into_bytes())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_decode(hex: &str) -> Option<Vec<u8>> {
    if !hex.is_ascii() || hex.len() % 2 != 0 {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}
