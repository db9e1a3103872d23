use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/proxy";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{bail, Context};

    fn read_global_key(global: &str, keys: [&str; 2]) -> Option<String> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
            .find(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    }

    // window.__APPROVALS_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__APPROVALS_CONFIG = { api_base_url: "..." }.
    pub(super) fn snapshot_from_globals() -> Option<String> {
        read_global_key("__APPROVALS_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global_key("__APPROVALS_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    pub(super) fn write_window_config(cfg: &RuntimeConfig) {
        let (Some(w), Some(url)) = (web_sys::window(), cfg.api_base_url.as_ref()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&w, &"__APPROVALS_CONFIG".into(), &obj);
    }

    pub(super) async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let origin = web_sys::window()
            .context("no global `window` exists")?
            .location()
            .origin()
            .map_err(|_| anyhow::anyhow!("window origin unavailable"))?;
        let resp = reqwest::get(format!("{}/config.json", origin))
            .await
            .context("fetching config.json")?;
        if !resp.status().is_success() {
            bail!("config.json responded {}", resp.status());
        }
        resp.json::<RuntimeConfig>()
            .await
            .context("parsing config.json")
    }
}

#[cfg(target_arch = "wasm32")]
async fn discover_base_url() -> Option<String> {
    if let Some(existing) = browser::snapshot_from_globals() {
        return Some(existing);
    }
    match browser::fetch_runtime_config().await {
        Ok(cfg) => {
            browser::write_window_config(&cfg);
            cfg.api_base_url
        }
        Err(err) => {
            log::debug!("runtime config unavailable: {:#}", err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn discover_base_url() -> Option<String> {
    None
}

fn cache_base_url(value: &str) -> String {
    let _ = API_BASE_URL.set(value.to_string());
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| value.to_string())
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    match discover_base_url().await {
        Some(url) if !url.trim().is_empty() => cache_base_url(url.trim()),
        _ => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn runtime_config_parses_optional_base_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{ "api_base_url": "https://example.test/api" }"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://example.test/api"));

        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }

    #[tokio::test]
    async fn host_builds_fall_back_to_default_base_url() {
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
        // cached on first resolution
        assert_eq!(API_BASE_URL.get().map(String::as_str), Some(DEFAULT_API_BASE_URL));
    }
}
