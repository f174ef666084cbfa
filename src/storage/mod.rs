//! 配置持久化
//!
//! 任务数据只活在进程内存里，唯一落盘的是应用配置
//! （`~/.taskdeck/config.toml`，目前只有主题选择）。

pub mod config;

use std::path::{Path, PathBuf};

use crate::error::{Result, TaskdeckError};

/// 获取 ~/.taskdeck/ 目录路径
pub fn taskdeck_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".taskdeck"))
        .ok_or_else(|| TaskdeckError::config("cannot find home directory"))
}

/// 确保配置目录存在
pub fn ensure_taskdeck_dir() -> Result<PathBuf> {
    let dir = taskdeck_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = toml::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
