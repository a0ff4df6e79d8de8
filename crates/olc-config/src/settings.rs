use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the CLI renders records on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `key=value` lines.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!(
                "invalid output format '{other}'. expected one of: text | json"
            )),
        }
    }
}

/// Typed view of the effective config for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub only_refresh: bool,
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: false,
            only_refresh: false,
            log_filter: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Build from merged config JSON. Every key is optional; present keys
    /// must have the right type.
    pub fn from_config_json(cfg: &Value) -> Result<Self> {
        let mut out = Self::default();

        if let Some(v) = cfg.pointer("/output/format") {
            let raw = v
                .as_str()
                .ok_or_else(|| anyhow!("output.format must be a string (got {v})"))?;
            out.format = OutputFormat::parse(raw)?;
        }

        if let Some(v) = cfg.pointer("/output/pretty") {
            out.pretty = v
                .as_bool()
                .ok_or_else(|| anyhow!("output.pretty must be a boolean (got {v})"))?;
        }

        if let Some(v) = cfg.pointer("/replay/only_refresh") {
            out.only_refresh = v
                .as_bool()
                .ok_or_else(|| anyhow!("replay.only_refresh must be a boolean (got {v})"))?;
        }

        if let Some(v) = cfg.pointer("/logging/filter") {
            let raw = v
                .as_str()
                .map(str::trim)
                .ok_or_else(|| anyhow!("logging.filter must be a string (got {v})"))?;
            if raw.is_empty() {
                return Err(anyhow!("logging.filter must not be empty"));
            }
            out.log_filter = raw.to_string();
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_config_gives_defaults() {
        assert_eq!(CliConfig::from_config_json(&json!({})).unwrap(), CliConfig::default());
    }

    #[test]
    fn all_keys_are_read() {
        let cfg = json!({
            "output": { "format": "JSON", "pretty": true },
            "replay": { "only_refresh": true },
            "logging": { "filter": " olc_events=trace " },
        });
        let c = CliConfig::from_config_json(&cfg).unwrap();
        assert_eq!(c.format, OutputFormat::Json);
        assert!(c.pretty);
        assert!(c.only_refresh);
        assert_eq!(c.log_filter, "olc_events=trace");
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(CliConfig::from_config_json(&json!({ "output": { "pretty": "yes" } })).is_err());
        assert!(CliConfig::from_config_json(&json!({ "output": { "format": "xml" } })).is_err());
        assert!(CliConfig::from_config_json(&json!({ "logging": { "filter": "" } })).is_err());
    }
}
