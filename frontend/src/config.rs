use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub log_level: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

/// Reads `key` (or its lowercase twin) from `window.<global>`.
fn read_global(global: &str, key: &str) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &key.to_lowercase().into()).ok());
    val.and_then(|v| v.as_string())
}

// window.__HRMS_ENV (env.js) takes precedence over window.__HRMS_CONFIG.
fn snapshot_from_globals() -> RuntimeConfig {
    let pick = |key: &str| read_global("__HRMS_ENV", key).or_else(|| read_global("__HRMS_CONFIG", key));
    RuntimeConfig {
        api_base_url: pick("API_BASE_URL"),
        log_level: pick("LOG_LEVEL"),
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

pub fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|raw| raw.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    value
}

/// Merges configuration layers, earlier layers winning field by field.
pub fn merge_layers(layers: &[RuntimeConfig]) -> RuntimeConfig {
    layers
        .iter()
        .fold(RuntimeConfig::default(), |acc, layer| RuntimeConfig {
            api_base_url: acc.api_base_url.or_else(|| layer.api_base_url.clone()),
            log_level: acc.log_level.or_else(|| layer.log_level.clone()),
        })
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    init().await;
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn log_level() -> log::Level {
    LOG_LEVEL.get().copied().unwrap_or(log::Level::Info)
}

/// Resolves the runtime configuration once: globals, then `./config.json`,
/// then built-in defaults.
pub async fn init() {
    let globals = snapshot_from_globals();
    let needs_file = globals.api_base_url.is_none() || globals.log_level.is_none();
    let file = if needs_file {
        fetch_runtime_config().await.unwrap_or_default()
    } else {
        RuntimeConfig::default()
    };
    let resolved = merge_layers(&[globals, file]);

    let base_url = cache_base_url(
        resolved
            .api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL),
    );
    let _ = LOG_LEVEL.set(parse_log_level(resolved.log_level.as_deref()));
    log::info!("Runtime config resolved (api_base_url={})", base_url);
}
