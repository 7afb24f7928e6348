use crate::keymap::KeyBinding;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_endpoint")]
    pub endpoint: String,

    #[serde(default = "Config::default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default)]
    pub keymap: Vec<KeyBinding>,
}

impl Config {
    const DEFAULT_ENDPOINT: &'static str = "https://apis.ccbp.in/wiki-search";
    const DEFAULT_DEBOUNCE_MS: u64 = 450;

    fn default_endpoint() -> String {
        Self::DEFAULT_ENDPOINT.into()
    }

    fn default_debounce_ms() -> u64 {
        Self::DEFAULT_DEBOUNCE_MS
    }
}
