//! 样式定义

use crate::core::render::Action;
use eframe::egui::{self, Color32, Rounding, Stroke};

/// 颜色主题
pub struct Theme {
    /// 标题栏底色
    pub title_bg: Color32,
    /// 句法树弹窗标题底色
    pub tree_title_bg: Color32,
    /// 按钮区底色
    pub button_bar_bg: Color32,
    pub error: Color32,
    /// 树节点连线
    pub tree_edge: Color32,
    /// 短语节点标签
    pub phrase_label: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title_bg: Color32::from_rgb(0xe8, 0xf0, 0xfe),      // 浅蓝
            tree_title_bg: Color32::from_rgb(0xcf, 0xe2, 0xff), // 蓝
            button_bar_bg: Color32::from_rgb(0xf9, 0xf9, 0xf9), // 灰白
            error: Color32::from_rgb(234, 67, 53),              // 红色
            tree_edge: Color32::from_gray(120),
            phrase_label: Color32::from_rgb(30, 60, 140),
        }
    }
}

impl Theme {
    /// 获取按钮对应的底色
    pub fn action_color(&self, action: Action) -> Color32 {
        let [r, g, b] = action.color();
        Color32::from_rgb(r, g, b)
    }
}

/// 圆角设置
pub fn default_rounding() -> Rounding {
    Rounding::same(4.0)
}

/// 浅色主题和按钮圆角
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.widgets.inactive.rounding = default_rounding();
    visuals.widgets.hovered.rounding = default_rounding();
    visuals.widgets.active.rounding = default_rounding();
    ctx.set_visuals(visuals);
}

/// 表格细边框
pub fn thin_stroke() -> Stroke {
    Stroke::new(1.0, Color32::from_gray(200))
}
