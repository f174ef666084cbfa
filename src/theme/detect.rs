//! 系统主题检测（Auto 模式用）

/// 检测系统是否处于深色模式
///
/// 返回 `true` 表示深色模式，`false` 表示浅色模式。
/// 只有 macOS 有可靠的查询手段；其它平台默认浅色。
pub fn detect_system_theme() -> bool {
    #[cfg(target_os = "macos")]
    {
        detect_macos()
    }
    #[cfg(not(target_os = "macos"))]
    {
        false
    }
}

/// macOS 通过 defaults 命令读取系统外观设置
///
/// AppleInterfaceStyle 存在且为 "Dark" 时是深色模式；
/// 键不存在（命令失败）时是浅色模式。
#[cfg(target_os = "macos")]
fn detect_macos() -> bool {
    std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_system_theme() {
        // 只是确保函数不会 panic
        let _is_dark = detect_system_theme();
    }
}
