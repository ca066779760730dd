//! Bearer-token session handling.
//!
//! The token arrives as a `token` query parameter after the OAuth redirect
//! and lives in `localStorage` between visits. Claims are decoded
//! client-side for display and expiry checks only; every API call still
//! carries the token for server-side verification.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::types::UserClaims;

/// `localStorage` key holding the session JWT.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Read the session token from `localStorage`.
#[must_use]
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token to `localStorage`.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the session token from `localStorage`.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// If the page URL carries a `token` query parameter (the OAuth redirect
/// target), persist it and strip it from the address bar. Returns the
/// token when one was captured.
pub fn capture_redirect_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let location = window.location();
        let search = location.search().ok()?;
        let token = search
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("token="))?
            .to_owned();
        if token.is_empty() {
            return None;
        }
        save_token(&token);
        let path = location.pathname().unwrap_or_else(|_| "/".to_owned());
        let _ = window
            .history()
            .and_then(|h| h.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)));
        Some(token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Decode the payload claims of a JWT without verifying its signature.
///
/// Returns `None` for anything that is not a three-part token with a
/// base64url JSON payload.
#[must_use]
pub fn decode_claims(token: &str) -> Option<UserClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether the claims carry an `exp` at or before `now_secs`.
/// Claims without an `exp` never expire client-side.
#[must_use]
pub fn claims_expired(claims: &UserClaims, now_secs: i64) -> bool {
    claims.exp.is_some_and(|exp| exp <= now_secs)
}
