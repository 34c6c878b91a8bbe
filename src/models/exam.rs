use serde::Deserialize;
use std::fmt;

/// 篇目编号
///
/// 原始文本用于查表，排序时按 [`ContentOrder`] 比较。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

/// 篇目编号的排序键：数字编号（可为负）按数值比较，且排在所有非数字编号之前
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContentOrder<'a> {
    Numeric(i64),
    Text(&'a str),
}

impl ContentId {
    /// “其他/未收录” 的保留编号
    pub const UNCATALOGUED: &'static str = "0";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn number(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }

    pub fn order(&self) -> ContentOrder<'_> {
        match self.number() {
            Some(n) => ContentOrder::Numeric(n),
            None => ContentOrder::Text(&self.0),
        }
    }

    pub fn is_uncatalogued(&self) -> bool {
        self.0 == Self::UNCATALOGUED
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 一道高考默写真题
#[derive(Debug, Clone, Deserialize)]
pub struct ExamQuestion {
    /// 年份（按字符串排序）
    pub year: String,
    /// 地区 / 卷别
    pub region: String,
    /// 所考篇目
    #[serde(rename = "contentId", alias = "content_id")]
    pub content_id: ContentId,
    /// 题干，含 `{n}` 占位符
    pub problem: String,
    /// 逗号分隔的答案片段
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_order() {
        let a = ContentId::new("9");
        let b = ContentId::new("10");
        assert!(a.order() < b.order());
        assert_eq!(ContentId::new("07").order(), ContentId::new("7").order());
    }

    #[test]
    fn test_negative_ids_are_numeric() {
        let negative = ContentId::new("-1");
        assert_eq!(negative.number(), Some(-1));
        assert!(negative.order() < ContentId::new("0").order());
        assert!(ContentId::new("-10").order() < negative.order());
        assert!(negative.order() < ContentId::new("P1").order());
    }

    #[test]
    fn test_text_ids_sort_after_numbers() {
        let numeric = ContentId::new("999");
        let text = ContentId::new("P1");
        assert_eq!(text.number(), None);
        assert!(numeric.order() < text.order());
        assert!(ContentId::new("P1").order() < ContentId::new("P2").order());
    }

    #[test]
    fn test_uncatalogued() {
        assert!(ContentId::new("0").is_uncatalogued());
        assert!(!ContentId::new("00").is_uncatalogued());
    }
}
