//! 句子规范化模块
//!
//! 把用户输入转换为查询键：
//! - 删除句末标点（۔ ؟ !）
//! - 连续空白折叠为单个空格
//! - 去掉首尾空白

/// 需要删除的标点符号
pub const STRIPPED_PUNCTUATION: [char; 3] = ['۔', '؟', '!'];

/// 规范化句子
///
/// 结果可以直接作为静态表的查询键。对已经规范化的字符串再次调用结果不变。
pub fn normalize(raw: &str) -> String {
    let without_marks: String = raw
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    without_marks.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 按空白切分为词
pub fn tokens(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_sentence_marks() {
        assert_eq!(normalize("جب۔"), normalize("جب"));
        assert_eq!(normalize("تینے کہا کھایو؟"), "تینے کہا کھایو");
        assert_eq!(normalize("!واہ!"), "واہ");
        assert_eq!(normalize("۔کپڑا۔ کی ؟لوگڑی!"), "کپڑا کی لوگڑی");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  دنیا   آ\tجا\n ری  ہی  "), "دنیا آ جا ری ہی");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(" ۔ ؟ ! "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "  جب ہماری   کلاس لگے کرے ای۔  ",
            "a ! b",
            "کہا پوچھو جائیگو قبر میں؟",
            "\u{3000}x\u{00A0}y ",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn test_punctuation_between_words_joins_spacing() {
        // 标点删除后留下的空白同样被折叠
        assert_eq!(normalize("a ۔ b"), "a b");
    }

    #[test]
    fn test_tokens() {
        assert_eq!(tokens("او اچھو  آدمی"), vec!["او", "اچھو", "آدمی"]);
        assert!(tokens("").is_empty());
    }
}
