//! 内存任务仓库
//!
//! 持有进程内唯一的任务集合，提供增删改查操作。
//! 校验不在这里做（那是表单控制器的职责），这里只保证
//! ID 分配和插入顺序。

use chrono::Utc;

use crate::model::{Task, TaskDraft, TaskId};

/// 任务仓库（插入顺序，不重排）
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加新任务：分配新 ID，completed 置 false，追加到末尾
    pub fn add(&mut self, draft: TaskDraft) -> &Task {
        let task = Task {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            deadline: draft.deadline,
            priority: draft.priority,
            completed: false,
            created_at: Utc::now(),
        };
        self.tasks.push(task);
        // 刚 push 的元素
        self.tasks.last().expect("task was just pushed")
    }

    /// 更新任务：合并描述/截止日期/优先级到匹配 ID 的任务
    ///
    /// 标题创建后不可变，这里不覆盖。ID 不存在时为 no-op，返回 false。
    pub fn update(&mut self, id: TaskId, draft: TaskDraft) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.description = draft.description;
                task.deadline = draft.deadline;
                task.priority = draft.priority;
                true
            }
            None => false,
        }
    }

    /// 翻转指定任务的完成标记
    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// 删除指定任务，其余任务相对顺序不变
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// 标题是否已存在（大小写不敏感），用于创建时的查重
    ///
    /// 用完整的 Unicode 大小写折叠比较，ASCII 之外的标题
    /// （如 "Äpfel" / "äpfel"）同样算重复。
    pub fn title_exists(&self, title: &str) -> bool {
        let lowered = title.to_lowercase();
        self.tasks.iter().any(|t| t.title.to_lowercase() == lowered)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 已完成任务数量（Header 的计数显示用）
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::Priority;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: format!("{} description", title),
            deadline: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            priority: Priority::Med,
        }
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = TaskStore::new();
        let a = store.add(draft("Buy Milk")).id;
        let b = store.add(draft("Write report")).id;
        let c = store.add(draft("Call dentist")).id;

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_starts_incomplete_in_insertion_order() {
        let mut store = TaskStore::new();
        store.add(draft("first"));
        store.add(draft("second"));

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
        assert!(store.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_toggle_flips_only_that_task() {
        let mut store = TaskStore::new();
        let a = store.add(draft("a")).id;
        let b = store.add(draft("b")).id;

        assert!(store.toggle_completed(b));

        assert!(!store.get(a).unwrap().completed);
        assert!(store.get(b).unwrap().completed);
        // 其他字段不变
        assert_eq!(store.get(b).unwrap().title, "b");
        assert_eq!(store.get(b).unwrap().description, "b description");

        // 再翻一次回到未完成
        assert!(store.toggle_completed(b));
        assert!(!store.get(b).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add(draft("a"));
        assert!(!store.toggle_completed(TaskId::new()));
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut store = TaskStore::new();
        store.add(draft("a"));
        let b = store.add(draft("b")).id;
        store.add(draft("c"));

        assert!(store.remove(b));

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
        assert!(!store.remove(b)); // 已删除，再删是 no-op
    }

    #[test]
    fn test_update_merges_fields_but_not_title() {
        let mut store = TaskStore::new();
        let id = store.add(draft("Write report")).id;

        let updated = store.update(
            id,
            TaskDraft {
                title: "Write report".to_string(),
                description: "Q4 summary".to_string(),
                deadline: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
                priority: Priority::High,
            },
        );
        assert!(updated);

        let task = store.get(id).unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "Q4 summary");
        assert_eq!(task.deadline, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.id, id);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add(draft("a"));
        assert!(!store.update(TaskId::new(), draft("ghost")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "a");
    }

    #[test]
    fn test_title_exists_case_insensitive() {
        let mut store = TaskStore::new();
        store.add(draft("Buy Milk"));

        assert!(store.title_exists("Buy Milk"));
        assert!(store.title_exists("buy milk"));
        assert!(store.title_exists("BUY MILK"));
        assert!(!store.title_exists("Buy Bread"));

        // 非 ASCII 标题同样大小写不敏感
        store.add(draft("Äpfel kaufen"));
        assert!(store.title_exists("äpfel kaufen"));
        assert!(store.title_exists("ÄPFEL KAUFEN"));
        assert!(!store.title_exists("Äpfel essen"));
    }

    #[test]
    fn test_completed_count() {
        let mut store = TaskStore::new();
        let a = store.add(draft("a")).id;
        store.add(draft("b"));
        store.toggle_completed(a);
        assert_eq!(store.completed_count(), 1);
    }

    #[test]
    fn test_create_toggle_delete_scenario() {
        let mut store = TaskStore::new();
        assert!(store.is_empty());

        let id = store
            .add(TaskDraft {
                title: "Write report".to_string(),
                description: "Q3 summary".to_string(),
                deadline: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                priority: Priority::High,
            })
            .id;
        assert_eq!(store.len(), 1);
        assert!(!store.get(id).unwrap().completed);

        store.toggle_completed(id);
        assert!(store.get(id).unwrap().completed);

        store.remove(id);
        assert!(store.is_empty());
    }
}
