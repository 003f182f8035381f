//! Config Codec - Shareable Token Round Trip
//!
//! A config serializes to canonical JSON, wrapped in a URL-fragment-safe
//! base64 token. Decoding applies a shallow corruption guard only; any
//! failure surfaces as None and callers fall back to the default face.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::groups::Config;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty token")]
    Empty,

    #[error("token is not valid base64: {0}")]
    Transform(#[from] base64::DecodeError),

    #[error("token payload is not valid UTF-8: {0}")]
    Payload(#[from] std::string::FromUtf8Error),

    #[error("token payload is not a valid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config is missing a `groups` array")]
    MissingGroups,
}

/// Serializes `config` into a compact token safe for a URL fragment.
/// Deterministic: equal configs produce byte-equal tokens.
pub fn encode(config: &Config) -> Result<String, serde_json::Error> {
    let json = canonical_json(config)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Inverse of [`encode`], with the failure cause preserved. A leading `#`
/// is stripped if present.
pub fn try_decode(token: &str) -> Result<Config, DecodeError> {
    let cleaned = token.strip_prefix('#').unwrap_or(token);
    if cleaned.is_empty() {
        return Err(DecodeError::Empty);
    }

    let bytes = URL_SAFE_NO_PAD.decode(cleaned)?;
    let json = String::from_utf8(bytes)?;
    let value: Value = serde_json::from_str(&json)?;

    // Corruption guard, not a schema validator: only the presence and
    // sequence-ness of `groups` is checked against the raw value.
    if !value.get("groups").map_or(false, Value::is_array) {
        return Err(DecodeError::MissingGroups);
    }

    Ok(serde_json::from_value(value)?)
}

/// Silent decode: any failure means "no overrides; use the default".
pub fn decode(token: &str) -> Option<Config> {
    try_decode(token).ok()
}

// --- Ambient token slot ---

/// The ambient token slot (a URL fragment, a file, plain memory), as an
/// injected capability. Writes replace the current value; a store never
/// accumulates history.
pub trait TokenStore {
    fn read(&self) -> Option<String>;
    fn write(&mut self, token: &str);
}

/// In-memory slot for hosts without an ambient token, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.token.clone()
    }

    fn write(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }
}

/// Decodes the store's current token, if any; same silent-None contract
/// as [`decode`].
pub fn load_from_store(store: &dyn TokenStore) -> Option<Config> {
    decode(&store.read()?)
}

/// Publishes `config` into the store as `#<token>`, replacing any
/// previous value.
pub fn sync_to_store(
    store: &mut dyn TokenStore,
    config: &Config,
) -> Result<(), serde_json::Error> {
    let token = encode(config)?;
    store.write(&format!("#{}", token));
    Ok(())
}

// --- Canonical form ---

/// Canonical JSON: recursively key-sorted, no whitespace. Keeps tokens and
/// fingerprints independent of serializer iteration order.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    serde_json::to_string(&sort_value(&v))
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let sorted: serde_json::Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_value(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_value).collect()),
        _ => v.clone(),
    }
}

/// Stable identity for a composition: SHA-256 hex over the canonical form.
pub fn fingerprint(config: &Config) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(config)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}
