//! 句法树弹窗
//!
//! 预计算条目以等宽文本显示；占位树按能力绘制为节点图或平铺列表。

use crate::core::tree::{FallbackTree, TreeDisplay, TreeNode};
use crate::ui::styles::Theme;
use eframe::egui::{self, Align2, FontId, Pos2, RichText, Stroke, Ui};

/// 叶子之间的水平间距
const SLOT_WIDTH: f32 = 70.0;
/// 层间距
const LEVEL_HEIGHT: f32 = 48.0;
const MARGIN: f32 = 30.0;

/// 布局后的节点
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub label: String,
    /// 以叶子槽位为单位
    pub x: f32,
    /// 层号，根为 0
    pub level: usize,
    pub parent: Option<usize>,
    pub is_leaf: bool,
}

/// 计算节点位置
///
/// 叶子从左到右依次占一个槽位，父节点位于子节点的中点。
pub fn layout(root: &TreeNode) -> Vec<PlacedNode> {
    let mut placed = Vec::new();
    let mut next_slot = 0usize;
    place(root, 0, None, &mut next_slot, &mut placed);
    placed
}

fn place(
    node: &TreeNode,
    level: usize,
    parent: Option<usize>,
    next_slot: &mut usize,
    placed: &mut Vec<PlacedNode>,
) -> f32 {
    let index = placed.len();
    placed.push(PlacedNode {
        label: node.label().to_string(),
        x: 0.0,
        level,
        parent,
        is_leaf: node.children().is_empty(),
    });

    let x = if node.children().is_empty() {
        let x = *next_slot as f32;
        *next_slot += 1;
        x
    } else {
        let xs: Vec<f32> = node
            .children()
            .iter()
            .map(|child| place(child, level + 1, Some(index), next_slot, placed))
            .collect();
        (xs[0] + xs[xs.len() - 1]) / 2.0
    };

    placed[index].x = x;
    x
}

/// 句法树弹窗
pub struct TreePopup {
    id: u64,
    pub title: String,
    pub display: TreeDisplay,
    pub visible: bool,
    theme: Theme,
}

impl TreePopup {
    pub fn new(id: u64, title: &str, display: TreeDisplay) -> Self {
        Self {
            id,
            title: title.to_string(),
            display,
            visible: true,
            theme: Theme::default(),
        }
    }

    /// 渲染弹窗
    pub fn render(&mut self, ctx: &egui::Context) {
        if !self.visible {
            return;
        }

        let mut open = true;
        egui::Window::new(&self.title)
            .id(egui::Id::new(("tree_popup", self.id)))
            .open(&mut open)
            .default_size([300.0, 250.0])
            .resizable(true)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(self.theme.tree_title_bg)
                    .inner_margin(egui::Margin::symmetric(4.0, 5.0))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(&self.title).strong().size(16.0));
                        });
                    });

                egui::ScrollArea::both().auto_shrink([false; 2]).show(ui, |ui| {
                    match &self.display {
                        TreeDisplay::Precomputed { text } => {
                            ui.label(RichText::new(*text).monospace());
                        }
                        TreeDisplay::Fallback { tree: FallbackTree::Rich { root } } => {
                            self.draw_tree(ui, root);
                        }
                        TreeDisplay::Fallback { tree: FallbackTree::Plain { label, tokens } } => {
                            ui.strong(label);
                            for token in tokens {
                                ui.label(format!("  • {}", token));
                            }
                        }
                    }
                });
            });

        if !open {
            self.visible = false;
        }
    }

    /// 绘制节点图
    fn draw_tree(&self, ui: &mut Ui, root: &TreeNode) {
        let nodes = layout(root);
        let size = egui::vec2(
            root.leaf_count() as f32 * SLOT_WIDTH + MARGIN * 2.0,
            root.depth() as f32 * LEVEL_HEIGHT + MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min;

        let position = |node: &PlacedNode| {
            Pos2::new(
                origin.x + MARGIN + node.x * SLOT_WIDTH + SLOT_WIDTH / 2.0,
                origin.y + MARGIN + node.level as f32 * LEVEL_HEIGHT,
            )
        };

        let edge = Stroke::new(1.0, self.theme.tree_edge);
        for node in &nodes {
            if let Some(parent) = node.parent {
                let from = position(&nodes[parent]) + egui::vec2(0.0, 9.0);
                let to = position(node) - egui::vec2(0.0, 9.0);
                painter.line_segment([from, to], edge);
            }
        }

        for node in &nodes {
            let color = if node.is_leaf {
                ui.visuals().text_color()
            } else {
                self.theme.phrase_label
            };
            painter.text(
                position(node),
                Align2::CENTER_CENTER,
                &node.label,
                FontId::proportional(14.0),
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::{build_fallback_tree, TreeCapability};

    #[test]
    fn test_layout_places_leaves_left_to_right() {
        let FallbackTree::Rich { root } = build_fallback_tree(&["a", "b", "c"], TreeCapability::Rich) else {
            panic!("expected rich tree");
        };
        let nodes = layout(&root);

        let leaves: Vec<(&str, f32)> = nodes
            .iter()
            .filter(|n| n.is_leaf)
            .map(|n| (n.label.as_str(), n.x))
            .collect();
        assert_eq!(leaves, vec![("a", 0.0), ("…", 1.0), ("b", 2.0), ("c", 3.0)]);

        assert_eq!(nodes[0].label, "TP");
        assert_eq!(nodes[0].parent, None);
        assert_eq!(nodes[0].level, 0);
        // T' 位于 T(1) 和 VP(2.5) 的中点，TP 位于 DP(0) 和 T'(1.75) 的中点
        assert_eq!(nodes[0].x, 0.875);
    }

    #[test]
    fn test_layout_parent_links() {
        let root = TreeNode::node("VP", vec![TreeNode::leaf("x")]);
        let nodes = layout(&root);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].parent, Some(0));
        assert_eq!(nodes[1].level, 1);
        assert_eq!(nodes[0].x, nodes[1].x);
    }
}
