//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        logo: Color::Rgb(0, 255, 136),        // 亮绿色
        highlight: Color::Rgb(0, 255, 136),
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        priority_low: Color::Rgb(100, 181, 246), // 蓝色
        priority_med: Color::Rgb(255, 213, 79),  // 黄色
        priority_high: Color::Rgb(255, 85, 85),  // 红色
        done: Color::Rgb(0, 200, 110),           // 绿色
        error: Color::Rgb(255, 85, 85),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        logo: Color::Rgb(0, 128, 68), // 深绿色
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        priority_low: Color::Rgb(33, 150, 243),
        priority_med: Color::Rgb(200, 130, 0),
        priority_high: Color::Rgb(200, 50, 50),
        done: Color::Rgb(0, 150, 80),
        error: Color::Rgb(200, 50, 50),
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),
        bg_secondary: Color::Rgb(68, 71, 90),
        logo: Color::Rgb(189, 147, 249), // 紫色
        highlight: Color::Rgb(189, 147, 249),
        text: Color::Rgb(248, 248, 242),
        muted: Color::Rgb(98, 114, 164),
        border: Color::Rgb(68, 71, 90),
        priority_low: Color::Rgb(139, 233, 253), // cyan
        priority_med: Color::Rgb(241, 250, 140), // 黄色
        priority_high: Color::Rgb(255, 85, 85),
        done: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),
        bg_secondary: Color::Rgb(59, 66, 82),
        logo: Color::Rgb(136, 192, 208), // frost
        highlight: Color::Rgb(136, 192, 208),
        text: Color::Rgb(236, 239, 244),
        muted: Color::Rgb(96, 112, 140),
        border: Color::Rgb(67, 76, 94),
        priority_low: Color::Rgb(129, 161, 193),
        priority_med: Color::Rgb(235, 203, 139),
        priority_high: Color::Rgb(191, 97, 106),
        done: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
    }
}
