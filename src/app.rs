//! 全局应用状态
//!
//! App 是唯一的状态容器：任务仓库、表单、列表选中项、Toast、主题。
//! 所有变更通过这里的方法进行，渲染每帧从它读取当前状态。

use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use crate::form::{FormSubmit, TaskForm};
use crate::model::Task;
use crate::storage::config::{Config, ThemeConfig};
use crate::store::TaskStore;
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务仓库
    pub store: TaskStore,
    /// 任务列表选中状态
    pub table_state: TableState,
    /// 任务表单（None 表示关闭）
    pub form: Option<TaskForm>,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let theme = Theme::from_name(&config.theme.name);
        let colors = get_theme_colors(theme);
        let last_system_dark = detect_system_theme();

        Self {
            should_quit: false,
            store: TaskStore::new(),
            table_state: TableState::default(),
            form: None,
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            show_help: false,
            last_system_dark,
        }
    }

    // ========== 列表选择 ==========

    /// 确保列表非空时有选中项
    pub fn ensure_selection(&mut self) {
        if self.store.is_empty() {
            self.table_state.select(None);
        } else if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.table_state.select(Some(prev));
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        self.table_state
            .selected()
            .and_then(|i| self.store.tasks().get(i))
    }

    // ========== 任务表单 ==========

    /// 打开创建表单（无选中任务上下文，字段为默认值）
    pub fn open_create_form(&mut self) {
        self.form = Some(TaskForm::create());
    }

    /// 为当前选中的任务打开编辑表单
    ///
    /// 已完成的任务不提供编辑入口（和列表里不显示 Update 一致）。
    pub fn open_edit_form(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        if task.completed {
            return;
        }
        self.form = Some(TaskForm::edit(&task));
    }

    /// 取消表单：丢弃未提交的编辑
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// 提交表单
    ///
    /// 校验失败时表单保持打开、错误信息已写入字段；成功时把载荷
    /// 交给仓库、关闭表单并弹出成功 Toast。
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let Some(submit) = form.submit(&self.store) else {
            // 校验失败，表单留在原地
            return;
        };

        match submit {
            FormSubmit::Create(draft) => {
                self.store.add(draft);
                self.show_toast("Task added successfully!");
            }
            FormSubmit::Update(id, draft) => {
                self.store.update(id, draft);
                self.show_toast("Task updated successfully!");
            }
        }

        self.form = None;
        self.ensure_selection();
    }

    // ========== 任务操作 ==========

    /// 翻转当前选中任务的完成标记
    pub fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id;
        self.store.toggle_completed(id);
    }

    /// 删除当前选中的任务
    pub fn delete_selected(&mut self) {
        let Some(index) = self.table_state.selected() else {
            return;
        };
        let Some(task) = self.store.tasks().get(index) else {
            return;
        };
        let id = task.id;

        if self.store.remove(id) {
            // 选中项跟随：删尾部时退到新的末尾
            if self.store.is_empty() {
                self.table_state.select(None);
            } else {
                self.table_state
                    .select(Some(index.min(self.store.len() - 1)));
            }
            self.show_toast("Task deleted successfully!");
        }
    }

    // ========== 主题选择器 ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        let themes = Theme::all();
        self.theme_selector_index = themes.iter().position(|t| *t == self.theme).unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并持久化
    ///
    /// 保存失败不影响本次会话的主题，只通过 Toast 提示。
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;

        let config = Config {
            theme: ThemeConfig {
                name: self.theme.label().to_string(),
            },
        };
        match crate::storage::config::save_config(&config) {
            Ok(()) => self.show_toast(format!("Theme: {}", self.theme.label())),
            Err(_) => self.show_toast("Could not save theme"),
        }
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    // ========== Toast / 杂项 ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;

    fn test_app() -> App {
        App::new(&Config::default())
    }

    fn fill_create_form(app: &mut App, title: &str, description: &str, deadline: &str) {
        app.open_create_form();
        let form = app.form.as_mut().unwrap();
        for c in title.chars() {
            form.input_char(c);
        }
        form.focus = FormField::Description;
        for c in description.chars() {
            form.input_char(c);
        }
        form.focus = FormField::Deadline;
        for c in deadline.chars() {
            form.input_char(c);
        }
    }

    #[test]
    fn test_create_flow_adds_task_and_closes_form() {
        let mut app = test_app();
        fill_create_form(&mut app, "Write report", "Q3 summary", "2024-03-01");

        app.submit_form();

        assert!(app.form.is_none());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].title, "Write report");
        assert!(!app.store.tasks()[0].completed);
        assert_eq!(
            app.toast.as_ref().unwrap().message,
            "Task added successfully!"
        );
        // 第一条任务自动获得选中
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_invalid_submit_keeps_form_open_and_store_untouched() {
        let mut app = test_app();
        app.open_create_form();

        app.submit_form();

        assert!(app.form.is_some());
        assert!(app.store.is_empty());
        assert!(app.toast.is_none());
        assert!(app.form.as_ref().unwrap().has_errors());
    }

    #[test]
    fn test_edit_flow_updates_in_place() {
        let mut app = test_app();
        fill_create_form(&mut app, "Buy Milk", "2 liters", "2024-03-01");
        app.submit_form();

        app.open_edit_form();
        let form = app.form.as_mut().unwrap();
        form.description.clear();
        for c in "3 liters".chars() {
            form.input_char(c);
        }
        app.submit_form();

        assert!(app.form.is_none());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].description, "3 liters");
        assert_eq!(app.store.tasks()[0].title, "Buy Milk");
        assert_eq!(
            app.toast.as_ref().unwrap().message,
            "Task updated successfully!"
        );
    }

    #[test]
    fn test_completed_task_has_no_edit_entry() {
        let mut app = test_app();
        fill_create_form(&mut app, "Buy Milk", "2 liters", "2024-03-01");
        app.submit_form();

        app.toggle_selected();
        assert!(app.store.tasks()[0].completed);

        app.open_edit_form();
        assert!(app.form.is_none());
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = test_app();
        fill_create_form(&mut app, "a", "da", "2024-03-01");
        app.submit_form();
        fill_create_form(&mut app, "b", "db", "2024-03-02");
        app.submit_form();

        // 选中最后一条再删除，选中项退到新的末尾
        app.table_state.select(Some(1));
        app.delete_selected();
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.table_state.selected(), Some(0));
        assert_eq!(
            app.toast.as_ref().unwrap().message,
            "Task deleted successfully!"
        );

        app.delete_selected();
        assert!(app.store.is_empty());
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_theme_selector_confirm_reports_save_result() {
        let original_home = std::env::var_os("HOME");

        // 可写的 HOME：保存成功，Toast 显示主题名
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", dir.path());

        let mut app = test_app();
        app.open_theme_selector();
        app.theme_selector_confirm();
        assert!(app.toast.as_ref().unwrap().message.starts_with("Theme: "));
        assert!(dir.path().join(".taskdeck/config.toml").exists());

        // HOME 指向普通文件：配置目录创建失败，Toast 提示保存失败
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        std::env::set_var("HOME", &blocker);

        let mut app = test_app();
        app.open_theme_selector();
        app.theme_selector_confirm();
        assert_eq!(app.toast.as_ref().unwrap().message, "Could not save theme");

        match original_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }

    #[test]
    fn test_cancel_discards_in_progress_edits() {
        let mut app = test_app();
        fill_create_form(&mut app, "Write report", "Q3 summary", "2024-03-01");

        app.close_form();

        assert!(app.form.is_none());
        assert!(app.store.is_empty());
    }
}
