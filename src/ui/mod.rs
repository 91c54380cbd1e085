//! 桌面界面模块

pub mod app;
pub mod dialogs;
pub mod styles;
pub mod table_popup;
pub mod tree_view;
