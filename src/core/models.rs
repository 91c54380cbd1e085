//! 核心数据模型定义
//!
//! 所有行数据都是 `'static` 字面量，进程启动时构建，之后不再修改。

use serde::Serialize;

/// 表格行的统一视图
/// 用于表格弹窗和剪贴板复制
pub trait TableRow {
    /// 列标题
    fn headers() -> &'static [&'static str];
    /// 按列顺序给出单元格
    fn cells(&self) -> Vec<&'static str>;
}

/// 形态特征行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MorphRow {
    /// 原文词形
    pub surface: &'static str,
    /// 标准乌尔都语形式
    pub standard: &'static str,
    /// 形态结构标签
    pub structure: &'static str,
    /// 音位变化说明
    pub phonemic_change: &'static str,
    /// 解释
    pub explanation: &'static str,
}

impl MorphRow {
    pub const fn new(
        surface: &'static str,
        standard: &'static str,
        structure: &'static str,
        phonemic_change: &'static str,
        explanation: &'static str,
    ) -> Self {
        Self {
            surface,
            standard,
            structure,
            phonemic_change,
            explanation,
        }
    }
}

impl TableRow for MorphRow {
    fn headers() -> &'static [&'static str] {
        &["Word", "Root", "Morph Structure", "Phonemic Change", "Explanation"]
    }

    fn cells(&self) -> Vec<&'static str> {
        vec![
            self.surface,
            self.standard,
            self.structure,
            self.phonemic_change,
            self.explanation,
        ]
    }
}

/// 依存分析行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DependencyRow {
    pub token: &'static str,
    pub lemma: &'static str,
    /// 词性标签（UPOS）
    pub pos: &'static str,
    /// 依存关系
    pub relation: &'static str,
    pub explanation: &'static str,
    /// 中心词，根节点为 "—"
    pub head: &'static str,
}

impl DependencyRow {
    pub const fn new(
        token: &'static str,
        lemma: &'static str,
        pos: &'static str,
        relation: &'static str,
        explanation: &'static str,
        head: &'static str,
    ) -> Self {
        Self {
            token,
            lemma,
            pos,
            relation,
            explanation,
            head,
        }
    }
}

impl TableRow for DependencyRow {
    fn headers() -> &'static [&'static str] {
        &["Word", "Lemma", "POS", "Dependency", "Explanation", "Head"]
    }

    fn cells(&self) -> Vec<&'static str> {
        vec![
            self.token,
            self.lemma,
            self.pos,
            self.relation,
            self.explanation,
            self.head,
        ]
    }
}

/// 行间注释中的单个语素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossWord {
    pub morpheme: &'static str,
    /// Leipzig 注释标签
    pub gloss: &'static str,
    pub meaning: &'static str,
}

impl GlossWord {
    pub const fn new(morpheme: &'static str, gloss: &'static str, meaning: &'static str) -> Self {
        Self {
            morpheme,
            gloss,
            meaning,
        }
    }
}

impl TableRow for GlossWord {
    fn headers() -> &'static [&'static str] {
        &["Word", "Gloss", "Meaning"]
    }

    fn cells(&self) -> Vec<&'static str> {
        vec![self.morpheme, self.gloss, self.meaning]
    }
}

/// Leipzig 行间注释条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossEntry {
    /// 梅瓦蒂语原句
    pub source: &'static str,
    /// 乌尔都语译文
    pub urdu: &'static str,
    /// 英语译文
    pub english: &'static str,
    /// 按顺序排列的语素
    pub words: &'static [GlossWord],
}

/// 静态表种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Morphology,
    Dependency,
    Gloss,
    SyntaxTree,
}

impl TableKind {
    /// 弹窗标题
    pub fn title(&self) -> &'static str {
        match self {
            TableKind::Morphology => "Morphological Features",
            TableKind::Dependency => "SpaCy Features",
            TableKind::Gloss => "Leipzig Glossing",
            TableKind::SyntaxTree => "X-Bar Syntax Tree",
        }
    }

    /// 未找到时的描述
    pub fn description(&self) -> &'static str {
        match self {
            TableKind::Morphology => "morphological features",
            TableKind::Dependency => "SpaCy features",
            TableKind::Gloss => "Leipzig glossing",
            TableKind::SyntaxTree => "X-Bar syntax tree",
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_header_order() {
        let row = MorphRow::new("جب", "جب", "Subordinating Conjunction (Temporal)", "—", "Introduces time clauses.");
        assert_eq!(row.cells().len(), MorphRow::headers().len());
        assert_eq!(row.cells()[2], "Subordinating Conjunction (Temporal)");

        let dep = DependencyRow::new("کرے", "کرنا", "AUX", "root", "Habitual auxiliary verb", "—");
        assert_eq!(dep.cells().len(), DependencyRow::headers().len());
        assert_eq!(dep.cells()[5], "—");
    }

    #[test]
    fn test_table_kind_labels() {
        assert_eq!(TableKind::Dependency.title(), "SpaCy Features");
        assert_eq!(TableKind::Gloss.to_string(), "Leipzig Glossing");
        assert_eq!(
            serde_json::to_string(&TableKind::SyntaxTree).unwrap(),
            "\"syntax_tree\""
        );
    }
}
