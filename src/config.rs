//! Host Configuration
//!
//! The admin page defines `window.s2jAllianceManager` before this module
//! loads. It is read exactly once, in `main`.

use alliance_core::{AdminConfig, ConfigError};
use wasm_bindgen::JsValue;

pub fn read_host_config() -> Result<AdminConfig, ConfigError> {
    let missing = || ConfigError::Missing(AdminConfig::GLOBAL_NAME.to_string());
    let window = web_sys::window().ok_or_else(missing)?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(AdminConfig::GLOBAL_NAME)).map_err(|_| missing())?;
    if value.is_undefined() || value.is_null() {
        return Err(missing());
    }

    let config: AdminConfig = serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validated()
}
