//! 文档生成层
//!
//! 每个生成器只读取 [`Catalog`](crate::models::Catalog) 与题目列表，返回渲染好的
//! Markdown 文本，不做任何 I/O。
//!
//! - `by_year` - 按年份排序的题目汇编
//! - `by_piece` - 按篇目归类、答案嵌入题干的汇编
//! - `summary` - 总览：导航、高频排行榜、趋势分析

pub mod by_piece;
pub mod by_year;
pub mod summary;

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Markdown 文本
    pub content: String,
    /// 小节数量（仅用于日志）
    pub sections: usize,
}
