//! Taskdeck 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。
//! 表单校验失败不算错误（它们是字段级提示，留在表单里），这里
//! 只覆盖配置读写这类真正会失败的路径。

use std::io;

use thiserror::Error;

/// Taskdeck 错误类型
#[derive(Debug, Error)]
pub enum TaskdeckError {
    /// I/O 错误（配置文件读写、目录创建等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Taskdeck Result 类型别名
pub type Result<T> = std::result::Result<T, TaskdeckError>;

impl TaskdeckError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskdeckError::config("home directory not found");
        assert_eq!(err.to_string(), "Config error: home directory not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TaskdeckError = io_err.into();
        assert!(matches!(err, TaskdeckError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err: TaskdeckError = parse_err.into();
        assert!(matches!(err, TaskdeckError::TomlParse(_)));
    }
}
