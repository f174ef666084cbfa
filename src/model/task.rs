//! 任务数据模型

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// 任务 ID（创建时由 Store 分配，之后不可变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 任务优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Med,
    High,
}

impl Priority {
    /// 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Med => "Med",
            Priority::High => "High",
        }
    }

    /// 所有优先级（表单选择器按此顺序渲染）
    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Med, Priority::High]
    }

    /// 切换到下一档
    pub fn next(&self) -> Priority {
        match self {
            Priority::Low => Priority::Med,
            Priority::Med => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// 切换到上一档
    pub fn prev(&self) -> Priority {
        match self {
            Priority::Low => Priority::High,
            Priority::Med => Priority::Low,
            Priority::High => Priority::Med,
        }
    }
}

/// 任务数据
#[derive(Debug, Clone)]
pub struct Task {
    /// 任务 ID
    pub id: TaskId,
    /// 标题（非空，Store 内大小写不敏感唯一）
    pub title: String,
    /// 描述（非空）
    pub description: String,
    /// 截止日期
    pub deadline: NaiveDate,
    /// 优先级
    pub priority: Priority,
    /// 是否已完成
    pub completed: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// 截止日期的列表显示格式: MM/DD/YY
    pub fn deadline_label(&self) -> String {
        self.deadline.format("%m/%d/%y").to_string()
    }
}

/// 通过表单校验的任务载荷（尚未入库，没有 ID）
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_unique() {
        let a = TaskId::new();
        let b = TaskId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_priority_cycle() {
        assert_eq!(Priority::Low.next(), Priority::Med);
        assert_eq!(Priority::Med.next(), Priority::High);
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.prev(), Priority::High);
        assert_eq!(Priority::default(), Priority::Med);
    }

    #[test]
    fn test_deadline_label() {
        let task = Task {
            id: TaskId::new(),
            title: "Write report".to_string(),
            description: "Q3 summary".to_string(),
            deadline: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            priority: Priority::High,
            completed: false,
            created_at: Utc::now(),
        };
        assert_eq!(task.deadline_label(), "03/01/24");
    }
}
