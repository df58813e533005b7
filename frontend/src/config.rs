//! Runtime resolution of the API base origin.
//!
//! Resolution order in the browser: `window.__VIAGENS_ENV` (env.js) →
//! `window.__VIAGENS_CONFIG` → fetched `./config.json` → the page's own
//! origin. The frontend is often served from the same host as the backend,
//! so same-origin is the production fallback; localhost only applies when
//! there is no window at all.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub const FALLBACK_BASE_URL: &str = "http://localhost:3001";

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn global_string(holder: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &holder.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    pub fn from_globals() -> Option<String> {
        global_string("__VIAGENS_ENV", &["API_BASE_URL", "api_base_url"])
            .or_else(|| global_string("__VIAGENS_CONFIG", &["api_base_url", "API_BASE_URL"]))
    }

    pub async fn from_config_json() -> Option<String> {
        let resp = reqwest::get("./config.json").await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()?.api_base_url
    }

    pub fn same_origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(url) = browser::from_globals() {
            return cache_base_url(&url);
        }
        if let Some(url) = browser::from_config_json().await {
            return cache_base_url(&url);
        }
        if let Some(origin) = browser::same_origin() {
            return cache_base_url(&origin);
        }
    }

    cache_base_url(FALLBACK_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base origin: {base}");
}
