//! 按年份排序的题目汇编

use super::Document;
use crate::models::{Catalog, ExamQuestion};

const TITLE: &str = "# 高考名句名篇默写题目汇编（按年份排序）";
const INTRO: &str = "> 整理说明：本表格由近及远排列，涵盖了高考中出现的经典默写题目。";

/// 按 (年份, 地区) 降序排列，相同键保持原顺序
pub fn sort_rows(exams: &[ExamQuestion]) -> Vec<&ExamQuestion> {
    let mut rows: Vec<&ExamQuestion> = exams.iter().collect();
    rows.sort_by(|a, b| (&b.year, &b.region).cmp(&(&a.year, &a.region)));
    rows
}

/// 生成按年份排序的文档
///
/// 年份变化时输出新的年份标题；每道题输出地区、`[课本·篇目]` 标签加题干、原始答案。
pub fn render(catalog: &Catalog, exams: &[ExamQuestion]) -> Document {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n{}\n\n", TITLE, INTRO));

    let mut sections = 0;
    let mut current_year: Option<&str> = None;

    for row in sort_rows(exams) {
        if current_year != Some(row.year.as_str()) {
            current_year = Some(row.year.as_str());
            sections += 1;
            out.push_str(&format!("## 📅 {}年\n\n", row.year));
        }

        let piece = catalog.lookup_piece_or_default(&row.content_id);
        let label = format!("[{}·{}]", piece.textbook, piece.name);

        out.push_str(&format!("### {}\n", row.region));
        out.push_str(&format!("**题目：** {} {}\n\n", label, row.problem));
        out.push_str(&format!("**答案：** `{}`\n\n", row.answer));
        out.push_str("---\n\n");
    }

    Document {
        content: out,
        sections,
    }
}
