use crate::config::Config;
use crate::models::loaders::load_sources;
use crate::orchestrator::document_writer::DocumentWriter;
use crate::reports::{by_piece, by_year, summary, Document};
use crate::utils::logging::{
    log_document_written, log_sources_loaded, log_startup, print_final_stats,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// 已写入的文档
#[derive(Debug, Clone)]
pub struct WrittenDocument {
    pub path: PathBuf,
    pub sections: usize,
}

/// 一次生成的统计
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub documents: Vec<WrittenDocument>,
    pub total_questions: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);
        Self { config }
    }

    /// 运行一次完整生成：加载 → 生成 → 写入
    ///
    /// 数据表加载失败时不写任何文档。文档按顺序写入，
    /// 后一份失败时前面已写入的文件保留在磁盘上。
    pub async fn run(&self) -> Result<RunReport> {
        let sources = load_sources(&self.config)
            .await
            .context("加载数据表失败")?;
        log_sources_loaded(
            sources.catalog.textbook_count(),
            sources.catalog.piece_count(),
            sources.exams.len(),
        );

        let writer = DocumentWriter::new(&self.config.output_dir);
        writer
            .prepare()
            .await
            .context("准备输出目录失败")?;

        let mut report = RunReport {
            total_questions: sources.exams.len(),
            ..Default::default()
        };

        let catalog = &sources.catalog;
        let exams = sources.exams.as_slice();

        let doc = by_year::render(catalog, exams);
        report
            .documents
            .push(self.write(&writer, &self.config.by_year_file, doc).await?);

        let doc = by_piece::render(catalog, exams);
        report
            .documents
            .push(self.write(&writer, &self.config.by_piece_file, doc).await?);

        let doc = summary::render(catalog, exams, &self.config);
        report
            .documents
            .push(self.write(&writer, &self.config.summary_file, doc).await?);

        print_final_stats(&report, writer.output_dir());

        Ok(report)
    }

    async fn write(
        &self,
        writer: &DocumentWriter,
        file_name: &str,
        doc: Document,
    ) -> Result<WrittenDocument> {
        let path = writer
            .write(file_name, &doc.content)
            .await
            .with_context(|| format!("写入文档失败: {}", file_name))?;
        log_document_written(&path, doc.sections);

        Ok(WrittenDocument {
            path,
            sections: doc.sections,
        })
    }
}
