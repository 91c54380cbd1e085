//! Core模块 - 包含所有核心业务逻辑

pub mod data;
pub mod lookup;
pub mod models;
pub mod normalize;
pub mod render;
pub mod scoring;
pub mod tree;
