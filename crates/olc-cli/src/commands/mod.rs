//! Command handler modules for the olc CLI.
//!
//! Shared input/output helpers live here; command logic lives in the submodules.

pub mod catalog;
pub mod classify;
pub mod event;
pub mod replay;

use anyhow::{Context, Result};
use olc_config::OutputFormat;
use serde_json::{Map, Value};
use std::fs;
use std::io::Read;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Read a file path, or stdin when `source` is `-`. A UTF-8 BOM is dropped.
pub fn read_input(source: &str) -> Result<String> {
    let bytes = if source == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("read stdin failed")?;
        buf
    } else {
        fs::read(source).with_context(|| format!("read input failed: {source}"))?
    };
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(&bytes);
    String::from_utf8(bytes.to_vec()).context("input must be UTF-8 text")
}

pub fn parse_json(raw: &str, what: &str) -> Result<Value> {
    serde_json::from_str(raw.trim()).with_context(|| format!("{what} must contain valid JSON"))
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Ordered key/value record; rendered as text or JSON.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Value::Object(map)
    }
}

fn text_value(v: &Value, quote: bool) -> String {
    let raw = match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    if quote && (raw.is_empty() || raw.contains(char::is_whitespace)) {
        format!("{raw:?}")
    } else {
        raw
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Output {
    /// Single-record layout: one `key=value` per line.
    pub fn render_block(&self, record: &Record) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(record
                .fields
                .iter()
                .map(|(k, v)| format!("{k}={}", text_value(v, false)))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => self.render_json(record),
        }
    }

    /// Stream layout: one record per line, values quoted when needed.
    pub fn render_inline(&self, record: &Record) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(record
                .fields
                .iter()
                .map(|(k, v)| format!("{k}={}", text_value(v, true)))
                .collect::<Vec<_>>()
                .join(" ")),
            OutputFormat::Json => {
                serde_json::to_string(&record.to_json()).context("json render failed")
            }
        }
    }

    fn render_json(&self, record: &Record) -> Result<String> {
        let v = record.to_json();
        if self.pretty {
            serde_json::to_string_pretty(&v).context("json render failed")
        } else {
            serde_json::to_string(&v).context("json render failed")
        }
    }

    pub fn print_block(&self, record: &Record) -> Result<()> {
        println!("{}", self.render_block(record)?);
        Ok(())
    }

    pub fn print_inline(&self, record: &Record) -> Result<()> {
        println!("{}", self.render_inline(record)?);
        Ok(())
    }
}
