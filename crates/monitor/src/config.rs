// HeartWire - STM32F401 UART Bring-Up
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Monitor settings: an optional YAML file merged with CLI overrides.
//! The frame itself always starts from the bring-up contract; only the
//! port name and baud rate are tunable from the host side.

use anyhow::{Context, Result};
use heartwire_console::SerialFrame;
use serde::Deserialize;
use std::path::Path;

/// Settings after merging the config file and CLI overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: String,
    pub frame: SerialFrame,
}

#[derive(Debug, Default, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub baud: Option<u32>,
}

impl MonitorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read monitor config {:?}", path))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse monitor config {:?}", path))
    }
}

/// CLI arguments win over the config file; the config file wins over the
/// frame defaults.
pub fn resolve(
    config: Option<&Path>,
    port: Option<String>,
    baud: Option<u32>,
) -> Result<Settings> {
    let file = match config {
        Some(path) => MonitorConfig::from_file(path)?,
        None => MonitorConfig::default(),
    };

    let port = port
        .or(file.port)
        .context("No serial port given; pass --port or set `port` in the config")?;

    let mut frame = SerialFrame::default();
    if let Some(baud) = baud.or(file.baud) {
        frame.baud_rate = baud;
    }

    Ok(Settings { port, frame })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_monitor_config() {
        let cfg: MonitorConfig = serde_yaml::from_str("port: /dev/ttyACM0\nbaud: 9600\n").unwrap();
        assert_eq!(cfg.port.as_deref(), Some("/dev/ttyACM0"));
        assert_eq!(cfg.baud, Some(9600));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let cfg: MonitorConfig = serde_yaml::from_str("{}").unwrap();
        assert!(cfg.port.is_none());
        assert!(cfg.baud.is_none());
    }

    #[test]
    fn test_cli_overrides_beat_defaults() {
        let settings = resolve(None, Some("/dev/ttyACM1".into()), Some(57_600)).unwrap();
        assert_eq!(settings.port, "/dev/ttyACM1");
        assert_eq!(settings.frame.baud_rate, 57_600);
    }

    #[test]
    fn test_default_baud_is_the_contract() {
        let settings = resolve(None, Some("/dev/ttyACM0".into()), None).unwrap();
        assert_eq!(settings.frame.baud_rate, 115_200);
    }

    #[test]
    fn test_missing_port_is_an_error() {
        assert!(resolve(None, None, None).is_err());
    }
}
