//! 主题选择器组件

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{Theme, ThemeColors};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};

/// 渲染主题选择器弹窗
pub fn render(frame: &mut Frame, selected_index: usize, colors: &ThemeColors) {
    let area = frame.area();
    let themes = Theme::all();

    // 标题 + 边框 + 内容 + 提示
    let popup_width = 30u16;
    let popup_height = (themes.len() as u16) + 4;

    let popup_area = center_dialog(area, popup_width, popup_height);
    let inner_area = render_dialog_frame(frame, popup_area, " Theme ", colors.highlight, colors);

    let [list_area, _, hint_area] = Layout::vertical([
        Constraint::Length(themes.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    // 渲染主题列表
    let lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let is_selected = i == selected_index;
            let prefix = if is_selected { "❯ " } else { "  " };

            if is_selected {
                Line::from(Span::styled(
                    format!("{}{}", prefix, theme.label()),
                    Style::default()
                        .fg(colors.highlight)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("{}{}", prefix, theme.label()),
                    Style::default().fg(colors.text),
                ))
            }
        })
        .collect();

    let list = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(list, list_area);

    // 渲染底部提示
    render_hint(
        frame,
        hint_area,
        &[("Enter", "select"), ("Esc", "cancel")],
        colors,
    );
}
