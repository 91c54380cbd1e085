//! Mewati - 梅瓦蒂语句子分析查询工具
//!
//! 核心设计原则：
//! - 所有数据在编译期固定，运行时只读
//! - 查询只做精确匹配，不做模糊匹配
//! - 界面与传输层只是薄适配器，逻辑全部在 core 中

pub mod core;
pub mod server;
pub mod ui;
