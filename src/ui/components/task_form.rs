//! 任务表单弹窗组件
//!
//! 创建模式展示标题/描述/截止日期/优先级四个字段；编辑模式
//! 标题不可改，不渲染标题字段。每个字段下方留一行放校验错误。

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::form::{FormField, TaskForm};
use crate::model::Priority;
use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};

/// 渲染任务表单弹窗
pub fn render(frame: &mut Frame, form: &TaskForm, colors: &ThemeColors) {
    let area = frame.area();

    // 每个文本字段占 3 行（标签 + 输入 + 错误），优先级占 3 行
    // （标签 + 选项 + 错误留白），加一行空行和一行提示
    let field_rows: u16 = if form.title_hidden() { 3 * 3 } else { 4 * 3 };
    let popup_height = (field_rows + 2 + 2).min(area.height.saturating_sub(2));
    let popup_width = 56u16.min(area.width.saturating_sub(4));

    let popup_area = center_dialog(area, popup_width, popup_height);
    let title = if form.title_hidden() {
        " Edit Task "
    } else {
        " Add Task "
    };
    let inner = render_dialog_frame(frame, popup_area, title, colors.highlight, colors);

    let mut constraints = Vec::new();
    if !form.title_hidden() {
        constraints.push(Constraint::Length(3)); // Title
    }
    constraints.push(Constraint::Length(3)); // Description
    constraints.push(Constraint::Length(3)); // Deadline
    constraints.push(Constraint::Length(3)); // Priority
    constraints.push(Constraint::Fill(1)); // 空行
    constraints.push(Constraint::Length(1)); // 提示行

    let areas = Layout::vertical(constraints).split(inner);
    let mut idx = 0;

    if !form.title_hidden() {
        render_text_field(
            frame,
            areas[idx],
            "Title",
            &form.title,
            form.focus == FormField::Title,
            form.error(FormField::Title),
            colors,
        );
        idx += 1;
    }

    render_text_field(
        frame,
        areas[idx],
        "Description",
        &form.description,
        form.focus == FormField::Description,
        form.error(FormField::Description),
        colors,
    );
    idx += 1;

    render_text_field(
        frame,
        areas[idx],
        "Deadline (YYYY-MM-DD)",
        &form.deadline,
        form.focus == FormField::Deadline,
        form.error(FormField::Deadline),
        colors,
    );
    idx += 1;

    render_priority_field(
        frame,
        areas[idx],
        form.priority,
        form.focus == FormField::Priority,
        colors,
    );

    let hint_area = areas[areas.len() - 1];
    render_hint(
        frame,
        hint_area,
        &[
            ("Enter", "save"),
            ("Tab", "next"),
            ("←/→", "priority"),
            ("Esc", "cancel"),
        ],
        colors,
    );
}

/// 渲染一个文本字段：标签行 + 输入行 + 错误行
fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    error: Option<&str>,
    colors: &ThemeColors,
) {
    let [label_area, input_area, error_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(label_line(label, focused, colors)), label_area);

    // 输入行: "  {value}█"（焦点字段带光标）
    let mut input_spans = vec![
        Span::raw("  "),
        Span::styled(value.to_string(), Style::default().fg(colors.text)),
    ];
    if focused {
        input_spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }
    frame.render_widget(Paragraph::new(Line::from(input_spans)), input_area);

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(colors.error),
            ))),
            error_area,
        );
    }
}

/// 渲染优先级字段：标签行 + 单选行
fn render_priority_field(
    frame: &mut Frame,
    area: Rect,
    current: Priority,
    focused: bool,
    colors: &ThemeColors,
) {
    let [label_area, options_area, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(label_line("Priority", focused, colors)),
        label_area,
    );

    let mut spans = vec![Span::raw("  ")];
    for (i, priority) in Priority::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let selected = *priority == current;
        let bullet = if selected { "(●)" } else { "( )" };
        let style = if selected {
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.muted)
        };
        spans.push(Span::styled(format!("{} {}", bullet, priority.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), options_area);
}

/// 字段标签行（焦点字段带 ❯ 前缀并高亮）
fn label_line<'a>(label: &'a str, focused: bool, colors: &ThemeColors) -> Line<'a> {
    if focused {
        Line::from(vec![
            Span::styled("❯ ", Style::default().fg(colors.highlight)),
            Span::styled(
                label,
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(label, Style::default().fg(colors.muted)),
        ])
    }
}
