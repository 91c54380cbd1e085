//! 渲染指令模块
//!
//! 把 (按钮动作, 当前输入) 映射为纯数据的渲染指令。
//! 桌面界面和 HTTP 接口都只负责把指令画出来。

use crate::core::lookup::{Corpus, LookupError};
use crate::core::models::{GlossWord, TableKind, TableRow};
use crate::core::normalize::{normalize, tokens};
use crate::core::scoring::EMPTY_PROMPT;
use crate::core::tree::{build_fallback_tree, TreeCapability, TreeDisplay};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 错误对话框标题
pub const NOT_FOUND_TITLE: &str = "Not Found";

/// 用户动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Morphology,
    Dependency,
    Gloss,
    SyntaxTree,
    ClearInput,
}

impl Action {
    /// 按钮顺序
    pub const ALL: [Action; 5] = [
        Action::Morphology,
        Action::Dependency,
        Action::Gloss,
        Action::SyntaxTree,
        Action::ClearInput,
    ];

    /// 按钮文字
    pub fn label(&self) -> &'static str {
        match self {
            Action::Morphology => "Morphological Features",
            Action::Dependency => "SpaCy Features",
            Action::Gloss => "Leipzig Glossing",
            Action::SyntaxTree => "X-Bar Syntax Tree",
            Action::ClearInput => "Clear Input",
        }
    }

    /// 按钮底色 (RGB)
    pub fn color(&self) -> [u8; 3] {
        match self {
            Action::Morphology => [0xff, 0xef, 0xef],
            Action::Dependency => [0xe8, 0xff, 0xe8],
            Action::Gloss => [0xe6, 0xf0, 0xff],
            Action::SyntaxTree => [0xff, 0xf5, 0xe6],
            Action::ClearInput => [0xf6, 0xea, 0xff],
        }
    }

    /// 对应的静态表
    pub fn table(&self) -> Option<TableKind> {
        match self {
            Action::Morphology => Some(TableKind::Morphology),
            Action::Dependency => Some(TableKind::Dependency),
            Action::Gloss => Some(TableKind::Gloss),
            Action::SyntaxTree => Some(TableKind::SyntaxTree),
            Action::ClearInput => None,
        }
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morphology" | "morph" => Ok(Action::Morphology),
            "dependency" | "spacy" => Ok(Action::Dependency),
            "gloss" | "leipzig" => Ok(Action::Gloss),
            "tree" | "syntax_tree" | "xbar" => Ok(Action::SyntaxTree),
            "clear" | "clear_input" => Ok(Action::ClearInput),
            other => Err(format!("未知动作: {}", other)),
        }
    }
}

/// 渲染指令
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderInstruction {
    /// 表格弹窗
    Table {
        title: &'static str,
        headers: Vec<&'static str>,
        rows: Vec<Vec<String>>,
        /// 需要加粗显示的内嵌表头行
        special_header_index: Option<usize>,
    },
    /// 句法树弹窗
    Tree {
        title: &'static str,
        display: TreeDisplay,
    },
    /// 错误对话框
    Error { title: &'static str, message: String },
    /// 空输入提示，不是错误
    Prompt { message: &'static str },
    /// 清空输入框
    ClearInput,
}

/// 根据动作和原始输入生成渲染指令
pub fn render(corpus: &Corpus, action: Action, raw_input: &str) -> RenderInstruction {
    render_with(corpus, action, raw_input, TreeCapability::default())
}

/// 表单/接口提交：清理后为空的句子直接返回输入提示
///
/// 桌面按钮仍走 [`render`]，空输入的句法树显示占位树。
pub fn render_submission(corpus: &Corpus, action: Action, raw_input: &str) -> RenderInstruction {
    if action != Action::ClearInput && normalize(raw_input).is_empty() {
        return RenderInstruction::Prompt { message: EMPTY_PROMPT };
    }
    render(corpus, action, raw_input)
}

/// 指定树绘制能力的版本
pub fn render_with(
    corpus: &Corpus,
    action: Action,
    raw_input: &str,
    capability: TreeCapability,
) -> RenderInstruction {
    let sentence = normalize(raw_input);

    let result = match action {
        Action::Morphology => corpus
            .morphology
            .lookup(&sentence)
            .map(|rows| table(TableKind::Morphology, rows.iter())),
        Action::Dependency => corpus
            .dependency
            .lookup(&sentence)
            .map(|rows| table(TableKind::Dependency, rows.iter())),
        Action::Gloss => corpus.gloss.lookup(&sentence).map(|entry| {
            let mut rows = vec![
                vec!["Mewati Sentence".to_string(), entry.source.to_string(), String::new()],
                vec!["Urdu Translation".to_string(), entry.urdu.to_string(), String::new()],
                vec!["English Translation".to_string(), entry.english.to_string(), String::new()],
                vec!["---".to_string(); 3],
                GlossWord::headers().iter().map(|h| h.to_string()).collect(),
            ];
            rows.extend(entry.words.iter().map(owned_cells));

            RenderInstruction::Table {
                title: TableKind::Gloss.title(),
                headers: vec!["Item", "Value", "Meaning"],
                rows,
                special_header_index: Some(4),
            }
        }),
        Action::SyntaxTree => {
            let display = match corpus.syntax_tree.lookup(&sentence) {
                Ok(text) => TreeDisplay::Precomputed { text },
                Err(_) => TreeDisplay::Fallback {
                    tree: build_fallback_tree(&tokens(&sentence), capability),
                },
            };
            Ok(RenderInstruction::Tree {
                title: TableKind::SyntaxTree.title(),
                display,
            })
        }
        Action::ClearInput => Ok(RenderInstruction::ClearInput),
    };

    result.unwrap_or_else(|err| {
        tracing::debug!("查询未命中: {}", err);
        not_found(err)
    })
}

fn table<'a, R: TableRow + 'a>(kind: TableKind, rows: impl Iterator<Item = &'a R>) -> RenderInstruction {
    RenderInstruction::Table {
        title: kind.title(),
        headers: R::headers().to_vec(),
        rows: rows.map(owned_cells).collect(),
        special_header_index: None,
    }
}

fn owned_cells<R: TableRow>(row: &R) -> Vec<String> {
    row.cells().into_iter().map(str::to_string).collect()
}

fn not_found(err: LookupError) -> RenderInstruction {
    RenderInstruction::Error {
        title: NOT_FOUND_TITLE,
        message: err.to_string(),
    }
}

/// 生成剪贴板内容
///
/// 第一行总是表头；有选中行时只复制选中行，否则复制全部行。
/// 单元格以制表符分隔。
pub fn copy_payload<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>], selection: &BTreeSet<usize>) -> String {
    let mut lines = vec![headers.iter().map(|h| h.as_ref()).collect::<Vec<_>>().join("\t")];

    let chosen: Vec<&Vec<String>> = if selection.is_empty() {
        rows.iter().collect()
    } else {
        selection.iter().filter_map(|&i| rows.get(i)).collect()
    };

    for row in chosen {
        lines.push(row.join("\t"));
    }

    lines.join("\n")
}
