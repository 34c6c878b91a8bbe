//! 按篇目归类的题目汇编，答案嵌入题干

use super::Document;
use crate::models::{Catalog, ExamQuestion};
use crate::services::fill_answers;

const TITLE: &str = "# 高考名句名篇默写题目汇编（按篇目排序）";
const INTRO: &str = "> 整理说明：按照篇目归类，便于针对性复习。答案已直接嵌入题目中。";

/// 按 (篇目编号, 年份) 降序排列，相同键保持原顺序
pub fn sort_rows(exams: &[ExamQuestion]) -> Vec<&ExamQuestion> {
    let mut rows: Vec<&ExamQuestion> = exams.iter().collect();
    rows.sort_by(|a, b| {
        (b.content_id.order(), &b.year).cmp(&(a.content_id.order(), &a.year))
    });
    rows
}

/// 生成按篇目归类的文档
///
/// `篇目 (课本)` 标题与上一行不同时开启新小节；每道题输出一行
/// `- [年份·地区] 已填入答案的题干`。
pub fn render(catalog: &Catalog, exams: &[ExamQuestion]) -> Document {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n{}\n\n", TITLE, INTRO));

    let mut sections = 0;
    let mut current_heading = String::new();

    for row in sort_rows(exams) {
        let piece = catalog.lookup_piece_or_default(&row.content_id);
        let heading = format!("{} ({})", piece.name, piece.textbook);

        if heading != current_heading {
            sections += 1;
            out.push_str(&format!("\n## 📖 {}\n\n", heading));
            current_heading = heading;
        }

        out.push_str(&format!(
            "- [{}·{}] {}\n",
            row.year,
            row.region,
            fill_answers(&row.problem, &row.answer)
        ));
    }
    out.push('\n');

    Document {
        content: out,
        sections,
    }
}
