//! 课本与背诵篇目目录

use super::exam::ContentId;
use serde::Deserialize;
use std::collections::HashMap;

/// 未收录篇目的名称
pub const UNCATALOGUED_PIECE_NAME: &str = "其他/未收录";
/// 未收录篇目所属模块
pub const UNCATALOGUED_TEXTBOOK_NAME: &str = "未收录";
/// 篇目引用的课本不存在时使用的名称
pub const UNKNOWN_TEXTBOOK_NAME: &str = "未知课本";

/// 课本
#[derive(Debug, Clone, Deserialize)]
pub struct Textbook {
    pub id: String,
    pub name: String,
}

/// 背诵篇目
#[derive(Debug, Clone, Deserialize)]
pub struct Piece {
    pub id: String,
    /// 加载后为规范化名称
    #[serde(alias = "名称")]
    pub name: String,
    #[serde(rename = "textbookId", alias = "课本")]
    pub textbook_id: String,
}

/// 解析后的篇目标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceLabel<'a> {
    pub name: &'a str,
    pub textbook: &'a str,
}

/// 保留编号 `"0"` 及所有无法解析的编号使用的标签
pub const UNCATALOGUED_LABEL: PieceLabel<'static> = PieceLabel {
    name: UNCATALOGUED_PIECE_NAME,
    textbook: UNCATALOGUED_TEXTBOOK_NAME,
};

/// 只读目录：课本表 + 篇目表
///
/// 加载完成后不再修改，作为参数传给各文档生成器。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    textbooks: HashMap<String, Textbook>,
    pieces: HashMap<String, Piece>,
}

impl Catalog {
    /// 由课本和篇目列表构建目录；编号重复时后出现的行覆盖先出现的行
    pub fn new(textbooks: Vec<Textbook>, pieces: Vec<Piece>) -> Self {
        Self {
            textbooks: textbooks.into_iter().map(|t| (t.id.clone(), t)).collect(),
            pieces: pieces.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn textbook_count(&self) -> usize {
        self.textbooks.len()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// 课本名称，找不到时为 “未知课本”
    pub fn textbook_name(&self, textbook_id: &str) -> &str {
        self.textbooks
            .get(textbook_id)
            .map(|t| t.name.as_str())
            .unwrap_or(UNKNOWN_TEXTBOOK_NAME)
    }

    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.pieces.get(id)
    }

    /// 查找篇目标签，找不到（或为保留编号）时返回未收录标签
    pub fn lookup_piece_or_default(&self, content_id: &ContentId) -> PieceLabel<'_> {
        if content_id.is_uncatalogued() {
            return UNCATALOGUED_LABEL;
        }
        match self.pieces.get(content_id.as_str()) {
            Some(piece) => PieceLabel {
                name: &piece.name,
                textbook: self.textbook_name(&piece.textbook_id),
            },
            None => UNCATALOGUED_LABEL,
        }
    }

    /// 篇目表中引用了不存在课本的篇目
    pub fn pieces_with_unknown_textbook(&self) -> impl Iterator<Item = &Piece> {
        self.pieces
            .values()
            .filter(move |p| !self.textbooks.contains_key(&p.textbook_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![Textbook {
                id: "T1".to_string(),
                name: "必修上".to_string(),
            }],
            vec![
                Piece {
                    id: "1".to_string(),
                    name: "劝学".to_string(),
                    textbook_id: "T1".to_string(),
                },
                Piece {
                    id: "2".to_string(),
                    name: "师说".to_string(),
                    textbook_id: "T9".to_string(),
                },
                Piece {
                    id: "0".to_string(),
                    name: "被覆盖".to_string(),
                    textbook_id: "T1".to_string(),
                },
            ],
        )
    }

    #[test]
    fn test_lookup_known_piece() {
        let catalog = sample_catalog();
        let label = catalog.lookup_piece_or_default(&ContentId::new("1"));
        assert_eq!(label.name, "劝学");
        assert_eq!(label.textbook, "必修上");
    }

    #[test]
    fn test_unknown_textbook_fallback() {
        let catalog = sample_catalog();
        let label = catalog.lookup_piece_or_default(&ContentId::new("2"));
        assert_eq!(label.name, "师说");
        assert_eq!(label.textbook, UNKNOWN_TEXTBOOK_NAME);
        assert_eq!(catalog.pieces_with_unknown_textbook().count(), 1);
    }

    #[test]
    fn test_unknown_piece_falls_back_to_uncatalogued() {
        let catalog = sample_catalog();
        let label = catalog.lookup_piece_or_default(&ContentId::new("404"));
        assert_eq!(label, UNCATALOGUED_LABEL);
    }

    #[test]
    fn test_reserved_id_always_uncatalogued() {
        let catalog = sample_catalog();
        let label = catalog.lookup_piece_or_default(&ContentId::new("0"));
        assert_eq!(label, UNCATALOGUED_LABEL);
        // 源数据仍然保留
        assert_eq!(catalog.piece("0").map(|p| p.name.as_str()), Some("被覆盖"));
    }
}
