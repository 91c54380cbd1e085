//! 静态表查询模块
//!
//! 设计原则：
//! - 只做逐字节精确匹配，不做模糊匹配或大小写折叠
//! - 表在启动时构建一次，之后只读
//! - 未命中是正常分支，返回携带原句的 NotFound

use crate::core::data;
use crate::core::models::{DependencyRow, GlossEntry, MorphRow, TableKind};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// 查询错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// 规范化后的句子不在表中
    #[error("No {} for:\n{sentence}", .table.description())]
    NotFound { table: TableKind, sentence: String },
}

/// 只读查询表
#[derive(Debug, Clone)]
pub struct LookupTable<V> {
    kind: TableKind,
    entries: HashMap<&'static str, V>,
    /// 保留原始顺序，供列举使用
    order: Vec<&'static str>,
}

impl<V> LookupTable<V> {
    /// 从字面量构建
    pub fn from_entries(kind: TableKind, entries: impl IntoIterator<Item = (&'static str, V)>) -> Self {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        for (key, value) in entries {
            if map.insert(key, value).is_none() {
                order.push(key);
            }
        }
        Self {
            kind,
            entries: map,
            order,
        }
    }

    /// 表种类
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// 精确查询
    pub fn lookup(&self, sentence: &str) -> Result<&V, LookupError> {
        self.entries.get(sentence).ok_or_else(|| LookupError::NotFound {
            table: self.kind,
            sentence: sentence.to_string(),
        })
    }

    pub fn contains(&self, sentence: &str) -> bool {
        self.entries.contains_key(sentence)
    }

    /// 按定义顺序列出所有键
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 全部语料表
/// 进程内共享，以 `Arc<Corpus>` 注入到处理器与界面中
#[derive(Debug, Clone)]
pub struct Corpus {
    pub morphology: LookupTable<&'static [MorphRow]>,
    pub dependency: LookupTable<&'static [DependencyRow]>,
    pub gloss: LookupTable<&'static GlossEntry>,
    pub syntax_tree: LookupTable<&'static str>,
}

impl Corpus {
    /// 从内置字面量构建
    pub fn builtin() -> Self {
        let corpus = Self {
            morphology: LookupTable::from_entries(
                TableKind::Morphology,
                data::MORPHOLOGY.iter().copied(),
            ),
            dependency: LookupTable::from_entries(
                TableKind::Dependency,
                data::DEPENDENCY.iter().copied(),
            ),
            gloss: LookupTable::from_entries(
                TableKind::Gloss,
                data::GLOSS.iter().map(|entry| (entry.source, entry)),
            ),
            syntax_tree: LookupTable::from_entries(TableKind::SyntaxTree, data::XBAR.iter().copied()),
        };

        tracing::debug!(
            "已加载语料: 形态 {} 条, 依存 {} 条, 注释 {} 条, 句法树 {} 条",
            corpus.morphology.len(),
            corpus.dependency.len(),
            corpus.gloss.len(),
            corpus.syntax_tree.len()
        );

        corpus
    }

    /// 构建共享实例
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::builtin())
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::builtin()
    }
}
