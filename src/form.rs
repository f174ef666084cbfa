//! 任务表单控制器（模态弹窗的状态机）
//!
//! 表单要么为创建打开（所有字段从默认值开始），要么为编辑已有任务
//! 打开（字段从任务当前值初始化，标题不可改所以不展示）。提交时逐
//! 字段校验，所有失败的规则同时上报；校验失败只写入字段级错误信息，
//! 从不向上抛错。

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::{Priority, Task, TaskDraft, TaskId};
use crate::store::TaskStore;

/// 表单字段（焦点与错误信息都以它为键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Deadline,
    Priority,
}

/// 表单模式：创建新任务 / 编辑已有任务
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(TaskId),
}

/// 校验通过后发出的提交事件，由 App 转交给 Store
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmit {
    Create(TaskDraft),
    Update(TaskId, TaskDraft),
}

/// 表单瞬态状态：字段值 + 焦点 + 上次提交遗留的错误
#[derive(Debug)]
pub struct TaskForm {
    pub mode: FormMode,
    pub title: String,
    pub description: String,
    /// 截止日期的原始输入（YYYY-MM-DD），提交时解析
    pub deadline: String,
    pub priority: Priority,
    pub focus: FormField,
    errors: HashMap<FormField, String>,
}

impl TaskForm {
    /// 为创建打开：字段清空，优先级默认 Med
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            deadline: String::new(),
            priority: Priority::default(),
            focus: FormField::Title,
            errors: HashMap::new(),
        }
    }

    /// 为编辑打开：字段从任务当前值初始化
    ///
    /// 标题创建后不可变，编辑表单不展示标题字段，焦点直接落在描述上。
    pub fn edit(task: &Task) -> Self {
        Self {
            mode: FormMode::Edit(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            deadline: task.deadline.format("%Y-%m-%d").to_string(),
            priority: task.priority,
            focus: FormField::Description,
            errors: HashMap::new(),
        }
    }

    /// 编辑模式下标题字段不展示
    pub fn title_hidden(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// 可聚焦字段（编辑模式跳过标题）
    fn focusable(&self) -> &'static [FormField] {
        if self.title_hidden() {
            &[
                FormField::Description,
                FormField::Deadline,
                FormField::Priority,
            ]
        } else {
            &[
                FormField::Title,
                FormField::Description,
                FormField::Deadline,
                FormField::Priority,
            ]
        }
    }

    /// 焦点移到下一个字段
    pub fn focus_next(&mut self) {
        let fields = self.focusable();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + 1) % fields.len()];
    }

    /// 焦点移到上一个字段
    pub fn focus_prev(&mut self) {
        let fields = self.focusable();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + fields.len() - 1) % fields.len()];
    }

    /// 当前焦点字段输入字符；该字段的陈旧错误随之清除
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            FormField::Deadline => self.deadline.push(c),
            // 优先级由 Left/Right 切换，不接受字符输入
            FormField::Priority => return,
        }
        self.errors.remove(&self.focus);
    }

    /// 当前焦点字段删除一个字符
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Deadline => {
                self.deadline.pop();
            }
            FormField::Priority => return,
        }
        self.errors.remove(&self.focus);
    }

    /// 优先级选择器向后切换
    pub fn priority_next(&mut self) {
        self.priority = self.priority.next();
    }

    /// 优先级选择器向前切换
    pub fn priority_prev(&mut self) {
        self.priority = self.priority.prev();
    }

    /// 指定字段的错误信息（渲染用）
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 提交表单
    ///
    /// 校验通过时返回提交事件（创建或更新），否则返回 None 并把
    /// 每个失败字段的错误信息留在表单里，表单保持打开。
    pub fn submit(&mut self, store: &TaskStore) -> Option<FormSubmit> {
        let deadline = self.validate(store)?;

        let draft = TaskDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            deadline,
            priority: self.priority,
        };

        Some(match self.mode {
            FormMode::Create => FormSubmit::Create(draft),
            FormMode::Edit(id) => FormSubmit::Update(id, draft),
        })
    }

    /// 逐字段校验，所有失败的规则同时写入错误表
    ///
    /// 全部通过时返回解析好的截止日期。
    fn validate(&mut self, store: &TaskStore) -> Option<NaiveDate> {
        self.errors.clear();

        // 标题只在创建时校验：编辑表单不暴露标题字段
        if matches!(self.mode, FormMode::Create) {
            let title = self.title.trim();
            if title.is_empty() {
                self.errors
                    .insert(FormField::Title, "Title is Required!".to_string());
            } else if store.title_exists(title) {
                self.errors.insert(
                    FormField::Title,
                    "Task with this title already exists!".to_string(),
                );
            }
        }

        if self.description.trim().is_empty() {
            self.errors.insert(
                FormField::Description,
                "Description is Required!".to_string(),
            );
        }

        let deadline = self.deadline.trim();
        let mut parsed = None;
        if deadline.is_empty() {
            self.errors
                .insert(FormField::Deadline, "Deadline is Required!".to_string());
        } else {
            match NaiveDate::parse_from_str(deadline, "%Y-%m-%d") {
                Ok(date) => parsed = Some(date),
                Err(_) => {
                    self.errors.insert(
                        FormField::Deadline,
                        "Deadline must be YYYY-MM-DD!".to_string(),
                    );
                }
            }
        }

        // 优先级受选择器约束，只会是三个枚举值之一，没有错误路径

        if self.errors.is_empty() {
            parsed
        } else {
            None
        }
    }
}
