use dioxus::prelude::*;
use serde::Deserialize;

/// Page attributes that tune the interactive widgets.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub data_url: String,
    /// Semicolon separated phrases for the typed headline.
    pub typing_words: Option<String>,
    /// Carousel autoplay interval in milliseconds, kept as the raw attribute.
    pub carousel_interval: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_url: "./data.json".to_string(),
            typing_words: None,
            carousel_interval: None,
        }
    }
}

pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move {
        match fetch_runtime_config().await {
            Ok(config) => config,
            Err(message) => {
                tracing::warn!("{message}; using defaults");
                RuntimeConfig::default()
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get("/config.json")
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    let data_url =
        std::env::var("PORTFOLIO_DATA_URL").unwrap_or_else(|_| "./data.json".to_string());
    Ok(RuntimeConfig {
        data_url,
        typing_words: std::env::var("TYPING_WORDS").ok(),
        carousel_interval: std::env::var("CAROUSEL_INTERVAL").ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_take_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"carousel_interval":"2500"}"#).unwrap();
        assert_eq!(
            config,
            RuntimeConfig {
                data_url: "./data.json".to_string(),
                typing_words: None,
                carousel_interval: Some("2500".to_string()),
            }
        );
    }
}
