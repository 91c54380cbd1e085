//! 对话框组件

use crate::ui::styles::Theme;
use eframe::egui::{self, RichText};

/// 错误提示对话框
pub struct ErrorDialog {
    /// 是否显示
    pub visible: bool,
    /// 标题
    pub title: String,
    /// 错误信息
    pub message: String,
    theme: Theme,
}

impl Default for ErrorDialog {
    fn default() -> Self {
        Self {
            visible: false,
            title: "Not Found".to_string(),
            message: String::new(),
            theme: Theme::default(),
        }
    }
}

impl ErrorDialog {
    /// 显示对话框
    pub fn show(&mut self, title: &str, message: &str) {
        self.visible = true;
        self.title = title.to_string();
        self.message = message.to_string();
    }

    /// 渲染对话框
    pub fn render(&mut self, ctx: &egui::Context) -> ErrorDialogResult {
        let mut result = ErrorDialogResult::None;

        if !self.visible {
            return result;
        }

        egui::Window::new(&self.title)
            .id(egui::Id::new("error_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(24.0).color(self.theme.error));
                    ui.label(&self.message);
                });

                ui.separator();

                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        result = ErrorDialogResult::Dismissed;
                        self.visible = false;
                    }
                });
            });

        result
    }
}

/// 错误对话框结果
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorDialogResult {
    None,
    Dismissed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_sets_content() {
        let mut dialog = ErrorDialog::default();
        assert!(!dialog.visible);

        dialog.show("Not Found", "No SpaCy features for:\nx");
        assert!(dialog.visible);
        assert_eq!(dialog.message, "No SpaCy features for:\nx");
    }
}
