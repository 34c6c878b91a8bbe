//! 篇目考查频次统计

use crate::models::{ContentId, ExamQuestion};
use std::collections::HashMap;

/// 单个篇目的考查次数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceFrequency<'a> {
    pub content_id: &'a ContentId,
    pub count: usize,
}

/// 统计每个篇目编号出现的次数，按首次出现顺序返回
pub fn tally(exams: &[ExamQuestion]) -> Vec<PieceFrequency<'_>> {
    let mut positions: HashMap<&ContentId, usize> = HashMap::new();
    let mut counts: Vec<PieceFrequency<'_>> = Vec::new();

    for exam in exams {
        match positions.get(&exam.content_id) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(&exam.content_id, counts.len());
                counts.push(PieceFrequency {
                    content_id: &exam.content_id,
                    count: 1,
                });
            }
        }
    }

    counts
}

/// 高频篇目排行
///
/// 按次数降序，次数相同者保持首次出现顺序（稳定排序），取前 `limit` 个。
/// `exclude_uncatalogued` 为真时，保留编号 `"0"` 不参与排名。
pub fn rank(
    exams: &[ExamQuestion],
    limit: usize,
    exclude_uncatalogued: bool,
) -> Vec<PieceFrequency<'_>> {
    let mut ranked: Vec<PieceFrequency<'_>> = tally(exams)
        .into_iter()
        .filter(|f| !(exclude_uncatalogued && f.content_id.is_uncatalogued()))
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// 热度星级：`min(5, floor(count / 1.5))`
pub fn heat_stars(count: usize) -> usize {
    (count * 2 / 3).min(5)
}

/// 热度指数的文本形式
pub fn heat_label(count: usize) -> String {
    "★".repeat(heat_stars(count))
}

/// `part` 占 `total` 的百分比，`total` 为 0 时为 0
pub fn share_percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}
