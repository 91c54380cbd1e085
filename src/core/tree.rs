//! 句法树模块
//!
//! 预计算的 X-Bar 树只作为展示文本，不做解析。
//! 不在表中的句子使用占位树，只有装饰作用。

use serde::Serialize;

/// 空输入时的占位词
pub const EMPTY_TOKEN: &str = "—";
/// 空节点占位符
pub const ELLIPSIS: &str = "…";

/// 树节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// 词
    Leaf(String),
    /// 带标签的短语节点
    Node { label: String, children: Vec<TreeNode> },
}

impl TreeNode {
    pub fn leaf(text: impl Into<String>) -> Self {
        TreeNode::Leaf(text.into())
    }

    pub fn node(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::Node {
            label: label.into(),
            children,
        }
    }

    /// 节点标签或词本身
    pub fn label(&self) -> &str {
        match self {
            TreeNode::Leaf(text) => text,
            TreeNode::Node { label, .. } => label,
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Leaf(_) => &[],
            TreeNode::Node { children, .. } => children,
        }
    }

    /// 叶子数量，用于界面布局
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Node { children, .. } => children.iter().map(TreeNode::leaf_count).sum::<usize>().max(1),
        }
    }

    /// 树高（叶子为 1）
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    /// 方括号表示法
    pub fn to_bracketed(&self) -> String {
        match self {
            TreeNode::Leaf(text) => text.clone(),
            TreeNode::Node { label, children } => {
                let mut out = format!("[{label}");
                for child in children {
                    out.push(' ');
                    out.push_str(&child.to_bracketed());
                }
                out.push(']');
                out
            }
        }
    }
}

/// 树绘制能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeCapability {
    /// 可以绘制节点图
    #[default]
    Rich,
    /// 只能显示平铺列表
    Plain,
}

/// 占位树
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackTree {
    Rich { root: TreeNode },
    Plain { label: String, tokens: Vec<String> },
}

impl FallbackTree {
    pub fn to_bracketed(&self) -> String {
        match self {
            FallbackTree::Rich { root } => root.to_bracketed(),
            FallbackTree::Plain { label, tokens } => format!("[{label} [{}]]", tokens.join(" ")),
        }
    }
}

/// 构建占位树
///
/// 结构固定为 `[TP [DP 首词] [T' [T …] [VP 其余词]]]`。
pub fn build_fallback_tree<S: AsRef<str>>(tokens: &[S], capability: TreeCapability) -> FallbackTree {
    let mut tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
    if tokens.is_empty() {
        tokens.push(EMPTY_TOKEN.to_string());
    }

    if capability == TreeCapability::Plain {
        return FallbackTree::Plain {
            label: "TP".to_string(),
            tokens,
        };
    }

    let rest: Vec<TreeNode> = if tokens.len() > 1 {
        tokens[1..].iter().map(TreeNode::leaf).collect()
    } else {
        vec![TreeNode::leaf(ELLIPSIS)]
    };

    let root = TreeNode::node(
        "TP",
        vec![
            TreeNode::node("DP", vec![TreeNode::leaf(tokens[0].clone())]),
            TreeNode::node(
                "T'",
                vec![
                    TreeNode::node("T", vec![TreeNode::leaf(ELLIPSIS)]),
                    TreeNode::node("VP", rest),
                ],
            ),
        ],
    );

    FallbackTree::Rich { root }
}

/// 句法树展示内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum TreeDisplay {
    /// 预计算的方括号文本
    Precomputed { text: &'static str },
    /// 占位树
    Fallback { tree: FallbackTree },
}

impl TreeDisplay {
    pub fn text(&self) -> String {
        match self {
            TreeDisplay::Precomputed { text } => (*text).to_string(),
            TreeDisplay::Fallback { tree } => tree.to_bracketed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let tree = build_fallback_tree(&["او", "اچھو", "آدمی"], TreeCapability::Rich);
        assert_eq!(tree.to_bracketed(), "[TP [DP او] [T' [T …] [VP اچھو آدمی]]]");

        let FallbackTree::Rich { root } = tree else {
            panic!("expected rich tree");
        };
        assert_eq!(root.label(), "TP");
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.leaf_count(), 4);
        assert_eq!(root.depth(), 4);
    }

    #[test]
    fn test_single_token_gets_placeholder_vp() {
        let tree = build_fallback_tree(&["دنیا"], TreeCapability::Rich);
        assert_eq!(tree.to_bracketed(), "[TP [DP دنیا] [T' [T …] [VP …]]]");
    }

    #[test]
    fn test_empty_tokens_use_placeholder() {
        let empty: [&str; 0] = [];
        let tree = build_fallback_tree(&empty, TreeCapability::Rich);
        assert_eq!(tree.to_bracketed(), "[TP [DP —] [T' [T …] [VP …]]]");
    }

    #[test]
    fn test_plain_capability_returns_flat_list() {
        let tree = build_fallback_tree(&["کپڑا", "کی"], TreeCapability::Plain);
        assert_eq!(
            tree,
            FallbackTree::Plain {
                label: "TP".to_string(),
                tokens: vec!["کپڑا".to_string(), "کی".to_string()],
            }
        );
        assert_eq!(tree.to_bracketed(), "[TP [کپڑا کی]]");
    }

    #[test]
    fn test_serializes_for_transport() {
        let tree = build_fallback_tree(&["a"], TreeCapability::Rich);
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["kind"], "rich");
        assert_eq!(json["root"]["label"], "TP");
        assert_eq!(json["root"]["children"][0]["children"][0], "a");
    }
}
