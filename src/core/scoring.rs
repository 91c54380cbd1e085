//! 文本评分模块
//!
//! 占位启发式：只依赖字符数和元音比例，没有任何学习参数。
//! 元音只统计拉丁字母 a e i o u，不扩展到乌尔都语字母。

/// 空输入时的提示
pub const EMPTY_PROMPT: &str = "Please enter some text.";

/// 评分结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// 清理后的字符数
    pub length: usize,
    pub vowel_count: usize,
    pub vowel_ratio: f64,
    /// 保留两位小数
    pub score: f64,
}

/// 计算评分细节，空输入返回 None
pub fn score_breakdown(text: &str) -> Option<ScoreBreakdown> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return None;
    }

    let length = cleaned.chars().count();
    let vowel_count = cleaned
        .chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count();
    let vowel_ratio = vowel_count as f64 / length as f64;
    let raw = (length % 10) as f64 + vowel_ratio * 5.0;

    Some(ScoreBreakdown {
        length,
        vowel_count,
        vowel_ratio,
        score: round2(raw),
    })
}

/// 按二进制精确值保留两位小数，恰好居中时取偶数
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// 评分并生成面向用户的消息
pub fn score(text: &str) -> String {
    match score_breakdown(text) {
        Some(breakdown) => format!("Beauty Score for your text: {}", format_score(breakdown.score)),
        None => EMPTY_PROMPT.to_string(),
    }
}

/// 整数值保留一位小数（10.0），其余按最短形式输出（6.67）
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_returns_prompt() {
        assert_eq!(score(""), EMPTY_PROMPT);
        assert_eq!(score("   \t\n"), EMPTY_PROMPT);
        assert!(score_breakdown(" ").is_none());
    }

    #[test]
    fn test_all_vowels() {
        let b = score_breakdown("aeiou").unwrap();
        assert_eq!(b.length, 5);
        assert_eq!(b.vowel_count, 5);
        assert_eq!(b.vowel_ratio, 1.0);
        assert_eq!(score("aeiou"), "Beauty Score for your text: 10.0");
    }

    #[test]
    fn test_no_vowels_wraps_length() {
        assert_eq!(score("bbbbbbbbbbb"), "Beauty Score for your text: 1.0");
    }

    #[test]
    fn test_vowels_are_case_insensitive() {
        assert_eq!(score("AEIOU"), score("aeiou"));
    }

    #[test]
    fn test_whitespace_is_collapsed_before_counting() {
        // "ab cd" 共 5 个字符，1 个元音
        assert_eq!(score("  ab   cd "), score("ab cd"));
        let b = score_breakdown("ab cd").unwrap();
        assert_eq!(b.length, 5);
        assert_eq!(b.score, 6.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        // 3 个字符，1 个元音：3 + 5/3 = 4.666...
        assert_eq!(score("abc"), "Beauty Score for your text: 4.67");
    }

    #[test]
    fn test_exact_halfway_rounds_to_even() {
        // 8 + 5/8 = 8.625，二进制可精确表示
        assert_eq!(score("abbbbbbb"), "Beauty Score for your text: 8.62");
        // 8 + 25/8 = 11.125
        assert_eq!(score("aaaaabbb"), "Beauty Score for your text: 11.12");
        // 40 % 10 = 0，5/40 = 0.125
        let text = format!("a{}", "b".repeat(39));
        assert_eq!(score(&text), "Beauty Score for your text: 0.12");
    }

    #[test]
    fn test_round2_keeps_integral_values() {
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(format_score(round2(10.0)), "10.0");
        assert_eq!(round2(4.666_666), 4.67);
    }

    #[test]
    fn test_urdu_text_has_no_vowels() {
        // "دنیا" 共 4 个字符，不含拉丁元音
        assert_eq!(score("دنیا"), "Beauty Score for your text: 4.0");
    }
}
