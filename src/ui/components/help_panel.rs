//! 帮助面板组件

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};

/// 快捷键说明: (按键, 描述)
const KEYS: &[(&str, &str)] = &[
    ("j / ↓", "Select next task"),
    ("k / ↑", "Select previous task"),
    ("n", "New task"),
    ("e / Enter", "Edit selected task"),
    ("Space", "Toggle completion"),
    ("x / Del", "Delete selected task"),
    ("t", "Theme selector"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();

    let popup_width = 44u16.min(area.width.saturating_sub(4));
    // 边框 + 按键列表 + 空行 + 提示
    let popup_height = (KEYS.len() as u16 + 4).min(area.height.saturating_sub(2));

    let popup_area = center_dialog(area, popup_width, popup_height);
    let inner_area = render_dialog_frame(frame, popup_area, " Help ", colors.highlight, colors);

    let [list_area, _, hint_area] = Layout::vertical([
        Constraint::Length(KEYS.len() as u16),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<10}", key),
                    Style::default()
                        .fg(colors.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(colors.text)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), list_area);

    render_hint(frame, hint_area, &[("Esc", "close")], colors);
}
