//! 答案嵌入
//!
//! 把逗号分隔的答案片段按序号填入题干中的 `{n}` 占位符。

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `{n}`，n 为不带前导零的正整数
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([1-9][0-9]*)\}").expect("占位符正则表达式无效"));

/// 按英文逗号拆分答案，片段去掉首尾空白
pub fn split_answer(answer: &str) -> Vec<&str> {
    answer.split(',').map(str::trim).collect()
}

/// 用强调样式渲染单个答案片段
pub fn emphasize(fragment: &str) -> String {
    format!("**{}**", fragment)
}

/// 将答案片段填入题干
///
/// 第 i 个片段（从 1 开始）替换题干中所有 `{i}`，与占位符在文中出现的先后无关。
/// 序号超出片段数量的占位符原样保留。替换只扫描一遍，片段内容不会被再次替换。
pub fn fill_answers(problem: &str, answer: &str) -> String {
    let fragments = split_answer(answer);

    PLACEHOLDER
        .replace_all(problem, |caps: &Captures| {
            let fragment = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| fragments.get(n - 1));
            match fragment {
                Some(text) => emphasize(text),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_in_order() {
        assert_eq!(fill_answers("A{1}B{2}C", "x,y"), "A**x**B**y**C");
    }

    #[test]
    fn test_fragments_trimmed() {
        assert_eq!(
            fill_answers("Line one {1}, line two {2}.", "foo, bar"),
            "Line one **foo**, line two **bar**."
        );
    }

    #[test]
    fn test_position_independent_of_text_order() {
        assert_eq!(fill_answers("先{2}后{1}", "甲,乙"), "先**乙**后**甲**");
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(fill_answers("{1}与{1}", "同"), "**同**与**同**");
    }

    #[test]
    fn test_missing_fragment_left_untouched() {
        assert_eq!(fill_answers("{1}，{2}，{3}", "a,b"), "**a**，**b**，{3}");
    }

    #[test]
    fn test_non_placeholders_untouched() {
        assert_eq!(fill_answers("{0}{01}{x}{}", "a"), "{0}{01}{x}{}");
    }

    #[test]
    fn test_fragment_not_rescanned() {
        assert_eq!(fill_answers("{1}{2}", "{2},b"), "**{2}****b**");
    }

    #[test]
    fn test_multi_digit_index() {
        let answer = (1..=11).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        assert_eq!(fill_answers("{11}{1}", &answer), "**11****1**");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(fill_answers("无占位符", "a,b"), "无占位符");
    }
}
