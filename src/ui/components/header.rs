use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// ASCII Art Logo - 2 行高
const LOGO: &[&str] = &[
    "▀█▀ ▄▀█ █▀ █▄▀ █▀▄ █▀▀ █▀▀ █▄▀",
    " █  █▀█ ▄█ █ █ █▄▀ ██▄ █▄▄ █ █",
];

/// Header 总高度：1 (边框) + 2 (Logo) + 1 (下边距) + 1 (计数行) = 5
pub const HEADER_HEIGHT: u16 = 5;

/// 渲染顶部区域（Logo + 任务计数）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    task_count: usize,
    completed_count: usize,
    colors: &ThemeColors,
) {
    // 外框（底边由表格区域衔接）
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [logo_area, _, info_area] = Layout::vertical([
        Constraint::Length(LOGO.len() as u16),
        Constraint::Length(1), // 下边距
        Constraint::Length(1), // 计数行
    ])
    .areas(inner_area);

    // 渲染 Logo
    let logo_lines: Vec<Line> = LOGO
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                *line,
                Style::default()
                    .fg(colors.logo)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(logo_lines).alignment(Alignment::Center),
        logo_area,
    );

    // 渲染计数行: "3 tasks · 1 done"
    let info = if task_count == 0 {
        Line::from(Span::styled("no tasks", Style::default().fg(colors.muted)))
    } else {
        Line::from(vec![
            Span::styled(
                format!("{} task{}", task_count, if task_count == 1 { "" } else { "s" }),
                Style::default().fg(colors.text),
            ),
            Span::styled(" · ", Style::default().fg(colors.muted)),
            Span::styled(
                format!("{} done", completed_count),
                Style::default().fg(colors.done),
            ),
        ])
    };
    frame.render_widget(
        Paragraph::new(info).alignment(Alignment::Center),
        info_area,
    );
}
