//! 主应用程序
//!
//! 输入框 + 五个按钮。每次点击都交给 `core::render` 生成渲染指令，
//! 本模块只负责把指令变成弹窗。

use crate::core::lookup::Corpus;
use crate::core::render::{render_with, Action, RenderInstruction};
use crate::core::tree::TreeCapability;
use crate::ui::dialogs::{ErrorDialog, ErrorDialogResult};
use crate::ui::styles::Theme;
use crate::ui::table_popup::TablePopup;
use crate::ui::tree_view::TreePopup;
use eframe::egui::{self, RichText};
use std::sync::Arc;

/// 窗口标题
pub const APP_TITLE: &str = "Mewati Language Model";

/// 主应用程序
pub struct MewatiApp {
    /// 语料表
    corpus: Arc<Corpus>,
    /// 主题
    theme: Theme,
    /// 输入框内容
    pub input: String,
    /// 树绘制能力
    capability: TreeCapability,
    /// 已打开的表格弹窗
    tables: Vec<TablePopup>,
    /// 已打开的句法树弹窗
    trees: Vec<TreePopup>,
    /// 错误对话框
    error_dialog: ErrorDialog,
    /// 弹窗ID计数器
    next_popup_id: u64,
    /// 状态消息
    status_message: String,
}

impl MewatiApp {
    /// 创建新的应用实例
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            theme: Theme::default(),
            input: String::new(),
            capability: TreeCapability::Rich,
            tables: Vec::new(),
            trees: Vec::new(),
            error_dialog: ErrorDialog::default(),
            next_popup_id: 0,
            status_message: "请输入梅瓦蒂语句子".to_string(),
        }
    }

    /// 指定树绘制能力
    pub fn with_capability(mut self, capability: TreeCapability) -> Self {
        self.capability = capability;
        self
    }

    /// 点击按钮：标题栏提示搜索中，处理完成后恢复
    fn run_with_status(&mut self, ctx: &egui::Context, action: Action) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
            "Searching: {} ...",
            action.label()
        )));
        ctx.set_cursor_icon(egui::CursorIcon::Wait);

        self.handle_action(action);

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(APP_TITLE.to_string()));
    }

    /// 处理按钮动作
    pub fn handle_action(&mut self, action: Action) {
        let _span = tracing::info_span!("action", button = action.label()).entered();

        let instruction = render_with(&self.corpus, action, &self.input, self.capability);
        match instruction {
            RenderInstruction::Table {
                title,
                headers,
                rows,
                special_header_index,
            } => {
                tracing::info!("{}: {} 行", title, rows.len());
                self.status_message = format!("{}: {} 行", title, rows.len());
                let id = self.allocate_popup_id();
                self.tables.push(TablePopup::new(
                    id,
                    title,
                    headers.iter().map(|h| h.to_string()).collect(),
                    rows,
                    special_header_index,
                ));
            }
            RenderInstruction::Tree { title, display } => {
                self.status_message = title.to_string();
                let id = self.allocate_popup_id();
                self.trees.push(TreePopup::new(id, title, display));
            }
            RenderInstruction::Error { title, message } => {
                tracing::info!("{}", message.replace('\n', " "));
                self.status_message = title.to_string();
                self.error_dialog.show(title, &message);
            }
            RenderInstruction::Prompt { message } => {
                self.status_message = message.to_string();
            }
            RenderInstruction::ClearInput => {
                self.input.clear();
                self.status_message = "输入已清空".to_string();
            }
        }
    }

    fn allocate_popup_id(&mut self) -> u64 {
        self.next_popup_id += 1;
        self.next_popup_id
    }

    /// 打开的弹窗数量
    pub fn open_popups(&self) -> usize {
        self.tables.iter().filter(|t| t.visible).count() + self.trees.iter().filter(|t| t.visible).count()
    }

    pub fn error_visible(&self) -> bool {
        self.error_dialog.visible
    }

    /// 渲染标题栏和输入区
    fn render_input(&mut self, ui: &mut egui::Ui) -> Option<Action> {
        let mut clicked = None;

        egui::Frame::none()
            .fill(self.theme.title_bg)
            .inner_margin(egui::Margin::symmetric(0.0, 10.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(APP_TITLE).strong().size(16.0));
                });
            });

        ui.add_space(6.0);
        ui.label("Enter Mewati Sentence:");
        ui.add(
            egui::TextEdit::singleline(&mut self.input)
                .font(egui::TextStyle::Heading)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);

        egui::Frame::none()
            .fill(self.theme.button_bar_bg)
            .inner_margin(egui::Margin::same(4.0))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for action in Action::ALL {
                        let button = egui::Button::new(RichText::new(action.label()).strong().color(egui::Color32::BLACK))
                            .fill(self.theme.action_color(action))
                            .min_size(egui::vec2(0.0, 28.0));
                        if ui.add(button).clicked() {
                            clicked = Some(action);
                        }
                    }
                });
            });

        clicked
    }
}

impl eframe::App for MewatiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 底部状态栏
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("弹窗: {}", self.open_popups()));
                });
            });
        });

        // 主内容区域
        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| self.render_input(ui))
            .inner;

        if let Some(action) = clicked {
            self.run_with_status(ctx, action);
        }

        // 渲染弹窗
        for table in self.tables.iter_mut() {
            table.render(ctx);
        }
        for tree in self.trees.iter_mut() {
            tree.render(ctx);
        }
        self.tables.retain(|t| t.visible);
        self.trees.retain(|t| t.visible);

        if self.error_dialog.render(ctx) == ErrorDialogResult::Dismissed {
            self.status_message = "请输入梅瓦蒂语句子".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> MewatiApp {
        MewatiApp::new(Corpus::shared())
    }

    #[test]
    fn test_lookup_opens_table_popup() {
        let mut app = app();
        app.input = "کہا پوچھو جائیگو قبر میں؟".to_string();
        app.handle_action(Action::Morphology);
        app.handle_action(Action::Dependency);
        assert_eq!(app.open_popups(), 2);
        assert!(!app.error_visible());
        assert_eq!(app.tables[0].rows.len(), 4);
        assert_eq!(app.tables[1].title, "SpaCy Features");
    }

    #[test]
    fn test_missing_sentence_shows_error() {
        let mut app = app();
        app.input = "کوئی اور جملہ".to_string();
        app.handle_action(Action::Morphology);
        assert_eq!(app.open_popups(), 0);
        assert!(app.error_visible());
        assert_eq!(app.error_dialog.message, "No morphological features for:\nکوئی اور جملہ");
    }

    #[test]
    fn test_tree_always_opens() {
        let mut app = app().with_capability(TreeCapability::Plain);
        app.handle_action(Action::SyntaxTree);
        assert_eq!(app.open_popups(), 1);
        assert_eq!(app.trees[0].display.text(), "[TP [—]]");
    }

    #[test]
    fn test_clear_input() {
        let mut app = app();
        app.input = "دنیا آ جا ری ہی".to_string();
        app.handle_action(Action::ClearInput);
        assert!(app.input.is_empty());
        assert_eq!(app.open_popups(), 0);
    }

    #[test]
    fn test_popup_ids_are_unique() {
        let mut app = app();
        app.input = "یا کا منہ سو".to_string();
        for _ in 0..3 {
            app.handle_action(Action::Morphology);
        }
        assert_eq!(app.next_popup_id, 3);
        assert_eq!(app.open_popups(), 3);
    }
}
