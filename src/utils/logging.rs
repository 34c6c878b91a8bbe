//! 日志工具模块
//!
//! 提供运行过程中各阶段的日志输出辅助函数

use crate::config::Config;
use crate::orchestrator::RunReport;
use std::path::Path;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 高考默写文档生成");
    info!("📁 数据目录: {}", config.data_dir.display());
    info!("📂 输出目录: {}", config.output_dir.display());
    info!("{}", "=".repeat(60));
}

/// 记录数据表加载结果
///
/// # 参数
/// - `textbooks`: 课本数量
/// - `pieces`: 篇目数量
/// - `exams`: 真题数量
pub fn log_sources_loaded(textbooks: usize, pieces: usize, exams: usize) {
    info!("✓ 已加载 {} 本课本、{} 个篇目、{} 道真题", textbooks, pieces, exams);
}

/// 记录单份文档写入完成
pub fn log_document_written(path: &Path, sections: usize) {
    info!("📝 已写入 {} ({} 个小节)", path.display(), sections);
}

/// 打印最终统计信息
pub fn print_final_stats(report: &RunReport, output_dir: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 文档生成完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 文档: {} 份", report.documents.len());
    info!("📚 题目总数: {}", report.total_questions);
    info!("{}", "=".repeat(60));
    info!("\n文档已保存至: {}", output_dir.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
