//! 表格弹窗组件
//!
//! 显示一张查询结果表，支持：
//! - 点击选中/取消选中行
//! - Ctrl+A 全选
//! - Ctrl+C 或复制按钮复制（总是带表头）
//! - 内嵌表头行加粗

use crate::core::render::copy_payload;
use crate::ui::styles::thin_stroke;
use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use std::collections::BTreeSet;

/// 每个字符的估算宽度（像素）
const CHAR_WIDTH: f32 = 7.0;
const ROW_HEIGHT: f32 = 18.0;

/// 表格弹窗
pub struct TablePopup {
    /// 窗口唯一ID
    id: u64,
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// 需要加粗的行
    special_header_index: Option<usize>,
    /// 选中的行
    selection: BTreeSet<usize>,
    /// 是否显示
    pub visible: bool,
}

impl TablePopup {
    /// 创建新的表格弹窗
    pub fn new(
        id: u64,
        title: &str,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        special_header_index: Option<usize>,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            headers,
            rows,
            special_header_index,
            selection: BTreeSet::new(),
            visible: true,
        }
    }

    /// 全选
    pub fn select_all(&mut self) {
        self.selection = (0..self.rows.len()).collect();
    }

    /// 切换某行的选中状态
    pub fn toggle_row(&mut self, index: usize) {
        if !self.selection.remove(&index) && index < self.rows.len() {
            self.selection.insert(index);
        }
    }

    pub fn selection(&self) -> &BTreeSet<usize> {
        &self.selection
    }

    /// 剪贴板内容
    pub fn clipboard_text(&self) -> String {
        copy_payload(&self.headers, &self.rows, &self.selection)
    }

    /// 渲染弹窗
    pub fn render(&mut self, ctx: &egui::Context) {
        if !self.visible {
            return;
        }

        let mut open = true;
        egui::Window::new(&self.title)
            .id(egui::Id::new(("table_popup", self.id)))
            .open(&mut open)
            .default_size([480.0, 240.0])
            .resizable(true)
            .show(ctx, |ui| {
                self.render_toolbar(ui);
                ui.separator();
                self.render_table(ui);
                self.handle_shortcuts(ui);
            });

        if !open {
            self.visible = false;
        }
    }

    /// 渲染工具栏
    fn render_toolbar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("✓ 全选").clicked() {
                self.select_all();
            }
            if ui.button("✗ 全不选").clicked() {
                self.selection.clear();
            }
            if ui.button("📋 复制").clicked() {
                let text = self.clipboard_text();
                ui.output_mut(|o| o.copied_text = text);
            }
            ui.label(
                RichText::new(format!("已选 {}/{}", self.selection.len(), self.rows.len()))
                    .small()
                    .color(egui::Color32::GRAY),
            );
        });
    }

    /// 渲染表格
    fn render_table(&mut self, ui: &mut Ui) {
        let widths = column_widths(&self.headers, &self.rows);
        let mut clicked_row = None;

        egui::Frame::none().stroke(thin_stroke()).show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(false)
                .resizable(true)
                .sense(egui::Sense::click())
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            for width in &widths {
                builder = builder.column(Column::initial(*width).at_least(30.0).clip(true));
            }

            let headers = &self.headers;
            let rows = &self.rows;
            let selection = &self.selection;
            let special = self.special_header_index;

            builder
                .header(ROW_HEIGHT + 2.0, |mut header| {
                    for title in headers {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for (index, row) in rows.iter().enumerate() {
                        body.row(ROW_HEIGHT, |mut table_row| {
                            table_row.set_selected(selection.contains(&index));
                            for cell in row {
                                table_row.col(|ui| {
                                    if special == Some(index) {
                                        ui.strong(cell);
                                    } else {
                                        ui.label(cell);
                                    }
                                });
                            }
                            if table_row.response().clicked() {
                                clicked_row = Some(index);
                            }
                        });
                    }
                });
        });

        if let Some(index) = clicked_row {
            self.toggle_row(index);
        }
    }

    /// 处理快捷键
    fn handle_shortcuts(&mut self, ui: &mut Ui) {
        if !ui.ui_contains_pointer() {
            return;
        }

        let (select_all, copy) = ui.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::A),
                i.events.iter().any(|e| matches!(e, egui::Event::Copy)),
            )
        });

        if select_all {
            self.select_all();
        }
        if copy {
            let text = self.clipboard_text();
            tracing::debug!("复制 {} 行到剪贴板", text.lines().count().saturating_sub(1));
            ui.output_mut(|o| o.copied_text = text);
        }
    }
}

/// 按最宽单元格估算列宽
pub fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
    headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let widest = rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0);
            widest as f32 * CHAR_WIDTH
        })
        .collect()
}
