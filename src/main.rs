//! Mewati - 梅瓦蒂语句子分析桌面工具
//!
//! 输入一句梅瓦蒂语，查看形态特征、依存分析、行间注释和 X-Bar 句法树。

use anyhow::Result;
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use mewati::core::lookup::Corpus;
use mewati::ui::app::{MewatiApp, APP_TITLE};
use mewati::ui::styles;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 配置阿拉伯字母字体
fn setup_custom_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    // 尝试加载系统中支持乌尔都语的字体
    let font_paths = [
        "C:/Windows/Fonts/times.ttf",                                        // Times New Roman
        "C:/Windows/Fonts/arial.ttf",                                        // Arial
        "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Regular.ttf",        // Noto Naskh
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",                   // DejaVu
        "/System/Library/Fonts/Supplemental/Times New Roman.ttf",           // macOS
    ];

    let mut font_loaded = false;
    for path in &font_paths {
        if let Ok(font_data) = std::fs::read(path) {
            fonts.font_data.insert(
                "arabic_font".to_owned(),
                FontData::from_owned(font_data).into(),
            );

            // 作为后备字体，拉丁字母仍使用默认字体
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .push("arabic_font".to_owned());

            fonts.families
                .entry(FontFamily::Monospace)
                .or_default()
                .push("arabic_font".to_owned());

            font_loaded = true;
            tracing::info!("已加载字体: {}", path);
            break;
        }
    }

    if !font_loaded {
        tracing::warn!("未能加载阿拉伯字母字体，乌尔都语文本可能显示为方块");
    }

    ctx.set_fonts(fonts);
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("启动 {}", APP_TITLE);

    let corpus = Corpus::shared();

    // 启动GUI
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 240.0])
            .with_min_inner_size([480.0, 200.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "Mewati",
        options,
        Box::new(move |cc| {
            setup_custom_fonts(&cc.egui_ctx);
            styles::apply(&cc.egui_ctx);
            Ok(Box::new(MewatiApp::new(corpus)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI启动失败: {}", e))?;

    Ok(())
}
