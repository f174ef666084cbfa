use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    empty_state, footer, header, help_panel, task_form, task_table, theme_selector, toast,
};

/// 渲染任务列表页面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, list_area, footer_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    // 渲染 Header（任务计数）
    header::render(
        frame,
        header_area,
        app.store.len(),
        app.store.completed_count(),
        &colors,
    );

    // 渲染任务表格或空状态
    if app.store.is_empty() {
        empty_state::render(frame, list_area, &colors);
    } else {
        task_table::render(frame, list_area, app.store.tasks(), &mut app.table_state, &colors);
    }

    // 渲染 Footer
    let selected_completed = app.selected_task().map(|t| t.completed).unwrap_or(false);
    footer::render(
        frame,
        footer_area,
        !app.store.is_empty(),
        selected_completed,
        &colors,
    );

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, &colors);
        }
    }

    // 渲染任务表单（如果打开）
    if let Some(ref form) = app.form {
        task_form::render(frame, form, &colors);
    }

    // 渲染主题选择器（如果打开）
    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, &colors);
    }

    // 渲染帮助面板
    if app.show_help {
        help_panel::render(frame, &colors);
    }
}
