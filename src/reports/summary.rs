//! 总览文档：导航、高频篇目排行榜与命题趋势分析

use super::Document;
use crate::config::Config;
use crate::models::{Catalog, ExamQuestion};
use crate::services::frequency::{heat_label, rank, share_percent};

const HEADER: &str = "\
# 高考语文名句名篇默写数据库

欢迎查阅高考名句名篇默写的高质量分析与题库。本数据库旨在通过数据驱动的方式，帮助了解高考命题规律。

";

const RANKING_INTRO: &str = "\
## 🏛️ 深度分析与考向洞察

### 1. 核心高频考点分析

基于对收录的题目统计，以下篇目是名副其实的“考试常青藤”：

| 排名 | 篇目 | 课本模块 | 考查频次 | 热度指数 |
| :--- | :--- | :--- | :--- | :--- |
";

const ANALYSIS: &str = "\
### 2. 命题趋势与变革方向

#### 🏮 趋势一：从“死记硬背”向“深度理解”跃迁
近三年的高考题展现出极强的**去模板化**特征。命题人不再单纯扣取难写的字词，而是设计一个具体的**沟通语境**或**生活场景**。如：
- **情境模拟**：在毕业典礼、书信往来、临摹画像等真实场景中激活名句。
- **逻辑推理**：题目往往包含“正如……所谓”、“为了表达……”等逻辑词，要求学生必须理解诗句背后的深层含义。

#### 🏮 趋势二：教材模块重心的战略转移
随着新教材（部编版）的全面铺开，**选择性必修**教材的比重显著增加。特别是《论语》、诸子散文以及唐宋八大散文系列，这种变化反映了高考对学生“传统文化底蕴”和“思辨素养”的极高要求。

#### 🏮 趋势三：跨文联动与文化常识融合
现代考试开始探索“名句+文化常识”的复合考法。例如，通过乐器知识、古代官制、服饰礼仪等作为切入点，引导出默写。这要求学生在背诵时，不能只盯字词，还要关注注释中的文化背景。

### 3. 备考建议

1. **精准定位**：优先啃下《琵琶行》、《赤壁赋》等超高频核心篇目。
2. **理解为王**：尝试用一句话概括每组名句的适用场景，而非仅仅默写。
3. **关注新秀**：加大对“选择性必修”篇目的练习力度，这是未来的增长点。

";

/// 生成总览文档
///
/// 排行榜排除 “其他/未收录”，长度由 `config.top_n` 决定；
/// 链接指向另外两份文档的文件名。`sections` 为排行榜条目数。
pub fn render(catalog: &Catalog, exams: &[ExamQuestion], config: &Config) -> Document {
    let total = exams.len();
    let ranked = rank(exams, config.top_n, true);

    let mut out = String::from(HEADER);

    out.push_str("## 🔗 快速导航\n\n");
    out.push_str(&format!(
        "- [📋 按年份查阅题目](./{}) — 适合模拟实测与查考真卷趋势。\n",
        config.by_year_file
    ));
    out.push_str(&format!(
        "- [📚 按篇目查阅题目](./{}) — 适合针对脆弱篇目进行专项突破。\n",
        config.by_piece_file
    ));
    out.push_str("- [📊 核心考点深度分析](#深度分析与考向洞察) — 揭秘高考命题的底层逻辑。\n\n");

    out.push_str(RANKING_INTRO);
    for (i, freq) in ranked.iter().enumerate() {
        let piece = catalog.lookup_piece_or_default(freq.content_id);
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            i + 1,
            piece.name,
            piece.textbook,
            freq.count,
            heat_label(freq.count)
        ));
    }

    let ranked_total: usize = ranked.iter().map(|f| f.count).sum();
    out.push_str("\n> [!NOTE]\n");
    out.push_str(&format!(
        "> 统计显示，排名前 {} 的篇目共考查 {} 次，占全部 {} 道题目的 {:.1}%。\n\n",
        ranked.len(),
        ranked_total,
        total,
        share_percent(ranked_total, total)
    ));

    out.push_str(ANALYSIS);

    out.push_str("---\n\n");
    out.push_str(&format!(
        "*(数据分析基于 {} 道高考默写真题自动生成，仅供参考。)*\n",
        total
    ));

    Document {
        content: out,
        sections: ranked.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentId, Piece, Textbook};

    fn exam(content_id: &str) -> ExamQuestion {
        ExamQuestion {
            year: "2024".to_string(),
            region: "全国甲卷".to_string(),
            content_id: ContentId::new(content_id),
            problem: "{1}".to_string(),
            answer: "a".to_string(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Textbook {
                id: "T1".to_string(),
                name: "必修上".to_string(),
            }],
            vec![
                Piece {
                    id: "1".to_string(),
                    name: "琵琶行".to_string(),
                    textbook_id: "T1".to_string(),
                },
                Piece {
                    id: "2".to_string(),
                    name: "赤壁赋".to_string(),
                    textbook_id: "T1".to_string(),
                },
            ],
        )
    }

    #[test]
    fn test_ranking_table() {
        let exams: Vec<ExamQuestion> = ["2", "1", "1", "0", "0", "0", "1"]
            .iter()
            .map(|id| exam(id))
            .collect();
        let doc = render(&catalog(), &exams, &Config::default());

        assert_eq!(doc.sections, 2);
        assert!(doc.content.contains("| 1 | 琵琶行 | 必修上 | 3 | ★★ |\n"));
        assert!(doc.content.contains("| 2 | 赤壁赋 | 必修上 | 1 |  |\n"));
        assert!(!doc.content.contains("| 其他/未收录 |"));
        assert!(doc.content.contains("排名前 2 的篇目共考查 4 次，占全部 7 道题目的 57.1%"));
    }

    #[test]
    fn test_links_follow_config() {
        let config = Config {
            by_year_file: "年份.md".to_string(),
            ..Config::default()
        };
        let doc = render(&catalog(), &[exam("1")], &config);
        assert!(doc.content.contains("](./年份.md)"));
        assert!(doc.content.contains("](./questions_by_piece.md)"));
    }

    #[test]
    fn test_top_n_and_footer() {
        let exams: Vec<ExamQuestion> = (1..=12).map(|i| exam(&i.to_string())).collect();
        let config = Config {
            top_n: 3,
            ..Config::default()
        };
        let doc = render(&catalog(), &exams, &config);
        assert_eq!(doc.sections, 3);
        assert!(doc.content.contains("| 3 | 其他/未收录 | 未收录 | 1 |  |"));
        assert!(!doc.content.contains("| 4 |"));
        assert!(doc
            .content
            .ends_with("*(数据分析基于 12 道高考默写真题自动生成，仅供参考。)*\n"));
    }

    #[test]
    fn test_empty_input() {
        let doc = render(&Catalog::default(), &[], &Config::default());
        assert_eq!(doc.sections, 0);
        assert!(doc.content.contains("占全部 0 道题目的 0.0%"));
        assert!(doc.content.contains("### 3. 备考建议"));
    }
}
