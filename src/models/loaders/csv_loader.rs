use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::catalog::{Catalog, Piece, Textbook};
use crate::models::exam::ExamQuestion;
use crate::services::title_normalizer::normalize_title;
use crate::utils::logging::truncate_text;
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// 一次运行所需的全部源数据
#[derive(Debug, Clone)]
pub struct SourceData {
    pub catalog: Catalog,
    pub exams: Vec<ExamQuestion>,
}

/// 解析带表头的 CSV 文本，按列名映射到 `T`
///
/// 缺少必需列时整张表解析失败。
pub fn parse_table<T: DeserializeOwned>(content: &str, path: &Path) -> AppResult<Vec<T>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|e| AppError::malformed_table(path, e))
}

/// 读取并解析单张 CSV 表
pub async fn load_table<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path, e))?;

    let rows = parse_table(&content, path)?;
    info!(
        "成功加载 {} 行: {}",
        rows.len(),
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    Ok(rows)
}

/// 规范化篇目名称
pub fn normalize_pieces(pieces: Vec<Piece>) -> Vec<Piece> {
    pieces
        .into_iter()
        .map(|mut piece| {
            let normalized = normalize_title(&piece.name);
            if normalized != piece.name {
                debug!(
                    "篇目名称规范化: {} → {}",
                    truncate_text(&piece.name, 40),
                    normalized
                );
            }
            piece.name = normalized;
            piece
        })
        .collect()
}

/// 检查数据表文件存在；无法判断时（如无权限）报告读取错误而非“不存在”
async fn ensure_exists(path: &Path) -> AppResult<()> {
    match fs::try_exists(path).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::file_not_found(path)),
        Err(e) => Err(AppError::file_read_failed(path, e)),
    }
}

/// 加载课本、篇目、真题三张表
///
/// 全部成功或全部失败：任一文件缺失或解析失败都直接返回错误。
/// 三个文件的存在性在解析前统一检查。
pub async fn load_sources(config: &Config) -> AppResult<SourceData> {
    let textbooks_path = config.textbooks_path();
    let pieces_path = config.pieces_path();
    let exams_path = config.exams_path();

    for path in [&textbooks_path, &pieces_path, &exams_path] {
        ensure_exists(path).await?;
    }

    let textbooks: Vec<Textbook> = load_table(&textbooks_path).await?;
    let pieces: Vec<Piece> = load_table(&pieces_path).await?;
    let exams: Vec<ExamQuestion> = load_table(&exams_path).await?;

    let catalog = Catalog::new(textbooks, normalize_pieces(pieces));

    for piece in catalog.pieces_with_unknown_textbook() {
        warn!(
            "篇目 {}（{}）引用的课本 {} 不存在",
            piece.id, piece.name, piece.textbook_id
        );
    }
    if catalog.piece("0").is_some() {
        warn!("篇目表中编号 0 的条目将被视为“其他/未收录”");
    }

    Ok(SourceData { catalog, exams })
}
