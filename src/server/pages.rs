//! HTML 页面渲染
//!
//! 单页两个表单：文本评分（beauty）和梅瓦蒂语句子分析（mewati）。
//! 所有用户文本在输出前转义。

use crate::core::render::RenderInstruction;
use std::fmt::Write;

/// 页面上的结果区
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageResult {
    #[default]
    Empty,
    /// 评分消息
    Score(String),
    /// 句子分析
    Analysis(RenderInstruction),
    /// 无法识别的表单
    UnknownForm(String),
}

/// 页面状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    /// 评分表单回填
    pub text: String,
    /// 分析表单回填
    pub mewati_text: String,
    /// 分析类型
    pub analysis: String,
    pub result: PageResult,
}

/// 转义 HTML 特殊字符
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const ANALYSES: [(&str, &str); 4] = [
    ("morphology", "Morphological Features"),
    ("dependency", "SpaCy Features"),
    ("gloss", "Leipzig Glossing"),
    ("tree", "X-Bar Syntax Tree"),
];

const STYLE: &str = "body{font-family:'Times New Roman',serif;margin:2em;}\
header{background:#e8f0fe;padding:10px;text-align:center;font-weight:bold;}\
form{margin:1em 0;padding:1em;border:1px solid #ddd;}\
input[type=text]{width:100%;font-size:1.1em;}\
table{border-collapse:collapse;}td,th{border:1px solid #ccc;padding:2px 6px;text-align:left;}\
.rtl{direction:rtl;}.result{font-weight:bold;}.error{color:#c0392b;white-space:pre-line;}";

/// 渲染完整页面
pub fn render_page(page: &Page) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Mewati Language Model</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>\n</head>\n<body>");
    html.push_str("<header>Mewati Language Model</header>\n");

    // 评分表单
    html.push_str("<form method=\"post\" action=\"/\">\n<input type=\"hidden\" name=\"form_id\" value=\"beauty\">\n");
    html.push_str("<label for=\"text\">Enter text:</label>\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"text\" name=\"text\" value=\"{}\">",
        escape(&page.text)
    );
    html.push_str("<button type=\"submit\">Get Beauty Score</button>\n</form>\n");

    // 分析表单
    html.push_str("<form method=\"post\" action=\"/\">\n<input type=\"hidden\" name=\"form_id\" value=\"mewati\">\n");
    html.push_str("<label for=\"mewati_text\">Enter Mewati Sentence:</label>\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" class=\"rtl\" id=\"mewati_text\" name=\"mewati_text\" value=\"{}\">",
        escape(&page.mewati_text)
    );
    html.push_str("<select name=\"analysis\">\n");
    for (value, label) in ANALYSES {
        let selected = if page.analysis == value { " selected" } else { "" };
        let _ = writeln!(html, "<option value=\"{value}\"{selected}>{label}</option>");
    }
    html.push_str("</select>\n<button type=\"submit\">Analyze</button>\n</form>\n");

    html.push_str(&render_result(&page.result));
    html.push_str("</body>\n</html>\n");
    html
}

/// 渲染结果区
pub fn render_result(result: &PageResult) -> String {
    let mut html = String::new();
    match result {
        PageResult::Empty => {}
        PageResult::Score(message) => {
            let _ = writeln!(html, "<p class=\"result\">{}</p>", escape(message));
        }
        PageResult::UnknownForm(form_id) => {
            let _ = writeln!(html, "<p class=\"error\">Unknown form: {}</p>", escape(form_id));
        }
        PageResult::Analysis(instruction) => match instruction {
            RenderInstruction::Table {
                title,
                headers,
                rows,
                special_header_index,
            } => {
                let _ = writeln!(html, "<h2>{}</h2>\n<table class=\"rtl\">", escape(title));
                html.push_str("<tr>");
                for header in headers {
                    let _ = write!(html, "<th>{}</th>", escape(header));
                }
                html.push_str("</tr>\n");
                for (index, row) in rows.iter().enumerate() {
                    let tag = if *special_header_index == Some(index) { "th" } else { "td" };
                    html.push_str("<tr>");
                    for cell in row {
                        let _ = write!(html, "<{tag}>{}</{tag}>", escape(cell));
                    }
                    html.push_str("</tr>\n");
                }
                html.push_str("</table>\n");
            }
            RenderInstruction::Tree { title, display } => {
                let _ = writeln!(
                    html,
                    "<h2>{}</h2>\n<pre class=\"rtl\">{}</pre>",
                    escape(title),
                    escape(&display.text())
                );
            }
            RenderInstruction::Error { title, message } => {
                let _ = writeln!(
                    html,
                    "<h2>{}</h2>\n<p class=\"error\">{}</p>",
                    escape(title),
                    escape(message)
                );
            }
            RenderInstruction::Prompt { message } => {
                let _ = writeln!(html, "<p class=\"result\">{}</p>", escape(message));
            }
            RenderInstruction::ClearInput => {}
        },
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
        assert_eq!(escape("دنیا"), "دنیا");
    }

    #[test]
    fn test_page_has_both_forms() {
        let html = render_page(&Page::default());
        assert!(html.contains("name=\"form_id\" value=\"beauty\""));
        assert!(html.contains("name=\"form_id\" value=\"mewati\""));
        assert!(html.contains("name=\"mewati_text\""));
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let page = Page {
            text: "<script>".to_string(),
            result: PageResult::Score("Beauty Score for your text: 1.0".to_string()),
            ..Page::default()
        };
        let html = render_page(&page);
        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<p class=\"result\">Beauty Score for your text: 1.0</p>"));
    }

    #[test]
    fn test_special_header_row_uses_th() {
        let result = PageResult::Analysis(RenderInstruction::Table {
            title: "Leipzig Glossing",
            headers: vec!["Item", "Value", "Meaning"],
            rows: vec![
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
                vec!["Word".to_string(), "Gloss".to_string(), "Meaning".to_string()],
            ],
            special_header_index: Some(1),
        });
        let html = render_result(&result);
        assert!(html.contains("<tr><td>a</td><td>b</td><td>c</td></tr>"));
        assert!(html.contains("<tr><th>Word</th><th>Gloss</th><th>Meaning</th></tr>"));
    }

    #[test]
    fn test_selected_analysis_is_kept() {
        let page = Page {
            analysis: "gloss".to_string(),
            ..Page::default()
        };
        assert!(render_page(&page).contains("<option value=\"gloss\" selected>"));
    }
}
