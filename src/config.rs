//! Page Configuration
//!
//! Optional settings read from a `window.todoListConfig` object. Every field
//! has a default, so the object can be absent or partial.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{Result, TodoError};

pub const DEFAULT_ICON: &str = "fa-utensils";
pub const LINK_TOKEN: &str = "<>";

/// Global the configuration is read from
const CONFIG_GLOBAL: &str = "todoListConfig";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TodoConfig {
    /// Icon class given to every new task
    pub default_icon: String,
    /// Staging text that makes Enter link the draft to the selected task
    pub link_token: String,
    pub task_placeholder: String,
    pub search_placeholder: String,
    pub log_level: LevelFilter,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            default_icon: DEFAULT_ICON.to_string(),
            link_token: LINK_TOKEN.to_string(),
            task_placeholder: "Enter a task...".to_string(),
            search_placeholder: "Search tasks...".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl TodoConfig {
    /// Read the page configuration. `Ok(None)` when the page sets none.
    pub fn from_window() -> Result<Option<Self>> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|_| TodoError::InvalidConfig(format!("cannot read window.{}", CONFIG_GLOBAL)))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(None);
        }
        Self::from_js(raw).map(Some)
    }

    pub fn from_js(value: JsValue) -> Result<Self> {
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| TodoError::InvalidConfig(e.to_string()))?;
        config.validated()
    }

    /// Reject values the UI cannot work with
    pub fn validated(self) -> Result<Self> {
        if self.link_token.is_empty() {
            // an empty token would turn every Enter on an empty input into a link
            return Err(TodoError::InvalidConfig("linkToken must not be empty".to_string()));
        }
        if self.default_icon.trim().is_empty() {
            return Err(TodoError::InvalidConfig("defaultIcon must not be blank".to_string()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> Result<TodoConfig> {
        serde_json::from_str::<TodoConfig>(json)
            .map_err(|e| TodoError::InvalidConfig(e.to_string()))?
            .validated()
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(parse("{}").unwrap(), TodoConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = parse(r#"{ "defaultIcon": "fa-broom", "logLevel": "debug" }"#).unwrap();
        assert_eq!(config.default_icon, "fa-broom");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.link_token, LINK_TOKEN);
        assert_eq!(config.task_placeholder, "Enter a task...");
    }

    #[test]
    fn test_empty_link_token_rejected() {
        assert!(matches!(
            parse(r#"{ "linkToken": "" }"#),
            Err(TodoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_blank_icon_rejected() {
        assert!(matches!(
            parse(r#"{ "defaultIcon": "  " }"#),
            Err(TodoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(parse(r#"{ "linkToken": 5 }"#).is_err());
    }
}
