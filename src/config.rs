use dioxus::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::countdown::CountdownFields;
use crate::reveal::{EdgeMargin, RevealOptions};
use crate::toast::ToastTimeline;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config fetch failed: {0}")]
    Fetch(String),
    #[error("config fetch failed: status {0}")]
    Status(u16),
    #[error("config decode failed: {0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub theme: ThemeConfig,
    pub countdown: Option<CountdownConfig>,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub stub: StubConfig,
    pub toast: ToastConfig,
    pub video: Option<VideoConfig>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            countdown: Some(CountdownConfig::default()),
            carousel: CarouselConfig::default(),
            reveal: RevealConfig::default(),
            stub: StubConfig::default(),
            toast: ToastConfig::default(),
            video: Some(VideoConfig::default()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub offset_ms: i64,
    pub fields: CountdownFields,
    pub tick_ms: u32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            offset_ms: 3 * 86_400_000,
            fields: CountdownFields::DaysHoursMinutesSeconds,
            tick_ms: 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub trigger_fraction: f64,
    pub bottom_inset_percent: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            trigger_fraction: 0.1,
            bottom_inset_percent: 10.0,
        }
    }
}

impl RevealConfig {
    pub fn options(&self) -> RevealOptions {
        RevealOptions {
            trigger_fraction: self.trigger_fraction,
            edge_margin: EdgeMargin {
                bottom: self.bottom_inset_percent,
                ..EdgeMargin::default()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StubConfig {
    pub purchase_delay_ms: u32,
    pub form_delay_ms: u32,
    pub newsletter_delay_ms: u32,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            purchase_delay_ms: 2000,
            form_delay_ms: 1500,
            newsletter_delay_ms: 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub enter_delay_ms: u32,
    pub display_ms: u32,
    pub fade_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            display_ms: 5000,
            fade_ms: 300,
        }
    }
}

impl ToastConfig {
    pub fn timeline(&self) -> ToastTimeline {
        ToastTimeline {
            enter_delay_ms: self.enter_delay_ms,
            display_ms: self.display_ms,
            fade_ms: self.fade_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub embed_url: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            embed_url: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
        }
    }
}

pub fn parse_config(raw: &str) -> Result<LandingConfig, ConfigError> {
    serde_json::from_str(raw).map_err(|err| ConfigError::Decode(err.to_string()))
}

/// Loads the runtime config, falling back to defaults when none is reachable.
pub fn use_landing_config() -> Resource<LandingConfig> {
    use_resource(|| async move {
        match fetch_landing_config().await {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("config: using defaults ({err})");
                LandingConfig::default()
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_landing_config() -> Result<LandingConfig, ConfigError> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<LandingConfig, ConfigError> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| ConfigError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(ConfigError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| ConfigError::Fetch(err.to_string()))?;
    parse_config(&body)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_landing_config() -> Result<LandingConfig, ConfigError> {
    let Ok(path) = std::env::var("LANDING_CONFIG") else {
        return Ok(LandingConfig::default());
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|err| ConfigError::Fetch(format!("{path}: {err}")))?;
    parse_config(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(parse_config("{}").unwrap(), LandingConfig::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = parse_config(
            r#"{ "countdown": { "offset_ms": 86400000, "fields": "hours_minutes_seconds" },
                 "stub": { "purchase_delay_ms": 1200 } }"#,
        )
        .unwrap();
        let countdown = config.countdown.unwrap();
        assert_eq!(countdown.offset_ms, 86_400_000);
        assert_eq!(countdown.fields, CountdownFields::HoursMinutesSeconds);
        assert_eq!(countdown.tick_ms, 1000);
        assert_eq!(config.stub.purchase_delay_ms, 1200);
        assert_eq!(config.stub.form_delay_ms, 1500);
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn null_sections_disable_optional_widgets() {
        let config = parse_config(r#"{ "countdown": null, "video": null }"#).unwrap();
        assert!(config.countdown.is_none());
        assert!(config.video.is_none());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            parse_config("{ not json"),
            Err(ConfigError::Decode(_))
        ));
    }

    #[test]
    fn reveal_config_maps_to_bottom_inset() {
        let options = RevealConfig::default().options();
        assert_eq!(options.root_margin(), "0% 0% -10% 0%");
        assert_eq!(options.trigger_fraction, 0.1);
    }
}
