//! Render use cases: turn an in-memory report into stdout text.

use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use serde::Serialize;
use uiguard_types::{A11yReport, AdviceReport};

/// Output format shared by both tools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

pub fn serialize_report<T: Serialize>(report: &T) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn render_scan(report: &A11yReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(uiguard_render::render_a11y_text(report)),
        OutputFormat::Json => json_text(report),
    }
}

pub fn render_advice(report: &AdviceReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(uiguard_render::render_advice_text(report)),
        OutputFormat::Json => json_text(report),
    }
}

fn json_text<T: Serialize>(report: &T) -> anyhow::Result<String> {
    let mut bytes = serialize_report(report)?;
    bytes.push(b'\n');
    String::from_utf8(bytes).context("report json is not utf-8")
}
