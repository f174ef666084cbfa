//! 应用配置持久化

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ensure_taskdeck_dir, load_toml, save_toml, taskdeck_dir};
use crate::error::Result;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// 主题名（未知名称回落到 Auto）
    #[serde(default = "default_theme_name")]
    pub name: String,
}

fn default_theme_name() -> String {
    "Auto".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
        }
    }
}

/// 配置文件路径: ~/.taskdeck/config.toml
fn config_path() -> Result<PathBuf> {
    Ok(taskdeck_dir()?.join("config.toml"))
}

/// 加载配置；文件缺失或损坏时回落到默认值
pub fn load_config() -> Config {
    config_path()
        .and_then(|path| load_toml(&path))
        .unwrap_or_default()
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    ensure_taskdeck_dir()?;
    save_toml(&config_path()?, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config {
            theme: ThemeConfig {
                name: "Dracula".to_string(),
            },
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.theme.name, "Dracula");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.theme.name, "Auto");

        let parsed: Config = toml::from_str("[theme]\n").unwrap();
        assert_eq!(parsed.theme.name, "Auto");
    }
}
