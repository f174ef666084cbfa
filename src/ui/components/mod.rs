pub mod dialog_utils;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod task_form;
pub mod task_table;
pub mod theme_selector;
pub mod toast;
