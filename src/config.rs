use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub script_url: String,
    pub debounce_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            script_url: env::var("SCRIPT_URL").unwrap_or_else(|_| {
                "https://script.google.com/macros/s/AKfycbzmniJj43dF-jJa-bNbhr6m0Ns8VOEe8szGghJ0ZSObhVCfmGnRCt3JLTcckT9HRo0E/exec"
                    .to_string()
            }),
            debounce_ms: env::var("DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
        }
    }
}
