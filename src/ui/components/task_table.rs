//! 任务表格组件

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::{Priority, Task};
use crate::theme::ThemeColors;

/// 优先级对应的颜色
fn priority_color(priority: Priority, colors: &ThemeColors) -> ratatui::style::Color {
    match priority {
        Priority::Low => colors.priority_low,
        Priority::Med => colors.priority_med,
        Priority::High => colors.priority_high,
    }
}

/// 渲染任务表格
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    table_state: &mut TableState,
    colors: &ThemeColors,
) {
    let header = Row::new(vec![
        Cell::from("Title"),
        Cell::from("Description"),
        Cell::from("Deadline"),
        Cell::from("Priority"),
        Cell::from("Done"),
    ])
    .style(
        Style::default()
            .fg(colors.muted)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = tasks
        .iter()
        .map(|task| {
            let title_style = if task.completed {
                // 已完成任务的标题划掉
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            let done_cell = if task.completed {
                Cell::from(Span::styled("[x]", Style::default().fg(colors.done)))
            } else {
                Cell::from(Span::styled("[ ]", Style::default().fg(colors.muted)))
            };

            Row::new(vec![
                Cell::from(Span::styled(task.title.clone(), title_style)),
                Cell::from(Span::styled(
                    task.description.clone(),
                    Style::default().fg(colors.text),
                )),
                Cell::from(Span::styled(
                    task.deadline_label(),
                    Style::default().fg(colors.text),
                )),
                Cell::from(Span::styled(
                    task.priority.label(),
                    Style::default().fg(priority_color(task.priority, colors)),
                )),
                done_cell,
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(24),
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().bg(colors.bg_secondary))
    .highlight_symbol("❯ ")
    .column_spacing(2)
    .block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(colors.border)),
    );

    frame.render_stateful_widget(table, area, table_state);
}
