use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::form::FormField;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 任务表单
    if app.form.is_some() {
        handle_form_key(app, key);
        return;
    }

    // 主题选择器
    if app.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    // 帮助面板
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理任务列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // 功能按键 - 新建任务
        KeyCode::Char('n') => {
            app.open_create_form();
        }

        // 功能按键 - 编辑选中任务（已完成的任务没有编辑入口）
        KeyCode::Char('e') | KeyCode::Enter => {
            app.open_edit_form();
        }

        // 功能按键 - 翻转完成标记
        KeyCode::Char(' ') => {
            app.toggle_selected();
        }

        // 功能按键 - 删除选中任务
        KeyCode::Char('x') | KeyCode::Delete => {
            app.delete_selected();
        }

        // 功能按键 - Theme 选择器
        KeyCode::Char('T') | KeyCode::Char('t') => {
            app.open_theme_selector();
        }

        // 功能按键 - 帮助
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        _ => {}
    }
}

/// 处理任务表单的键盘事件
fn handle_form_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.form.as_mut() else {
        return;
    };
    let on_priority = form.focus == FormField::Priority;

    match key.code {
        // 提交
        KeyCode::Enter => {
            app.submit_form();
        }

        // 取消：丢弃未提交的编辑
        KeyCode::Esc => {
            app.close_form();
        }

        // 字段导航
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
        }

        // 优先级选择器
        KeyCode::Left => {
            if on_priority {
                form.priority_prev();
            }
        }
        KeyCode::Right => {
            if on_priority {
                form.priority_next();
            }
        }
        // h/l 只在优先级行生效，其余时候是普通字符
        KeyCode::Char('h') if on_priority => {
            form.priority_prev();
        }
        KeyCode::Char('l') if on_priority => {
            form.priority_next();
        }

        // 删除字符
        KeyCode::Backspace => {
            form.backspace();
        }

        // 输入字符
        KeyCode::Char(c) => {
            form.input_char(c);
        }

        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_selector_prev();
        }

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_selector_next();
        }

        // 确认选择
        KeyCode::Enter => {
            app.theme_selector_confirm();
        }

        // 取消
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_theme_selector();
        }

        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 关闭帮助面板
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.show_help = false;
        }
        _ => {}
    }
}
