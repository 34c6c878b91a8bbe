//! 文档写入
//!
//! 只负责“把文本写到输出目录”，不关心文档内容。

use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 文档写入器
pub struct DocumentWriter {
    output_dir: PathBuf,
}

impl DocumentWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 创建输出目录（已存在时无操作）
    pub async fn prepare(&self) -> AppResult<()> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| AppError::create_dir_failed(&self.output_dir, e))
    }

    /// 写入文档，已存在的同名文件被整体覆盖
    ///
    /// # 返回
    /// 写入文件的完整路径
    pub async fn write(&self, file_name: &str, content: &str) -> AppResult<PathBuf> {
        let path = self.output_dir.join(file_name);
        debug!("写入文档: {} ({} 字节)", path.display(), content.len());

        fs::write(&path, content)
            .await
            .map_err(|e| AppError::file_write_failed(&path, e))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_is_idempotent_and_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DocumentWriter::new(dir.path().join("docs").join("nested"));

        tokio_test::block_on(async {
            writer.prepare().await.unwrap();
            writer.prepare().await.unwrap();

            writer.write("a.md", "第一版内容").await.unwrap();
            let path = writer.write("a.md", "新").await.unwrap();
            assert_eq!(std::fs::read_to_string(path).unwrap(), "新");
        });
    }

    #[test]
    fn test_write_without_prepare_fails() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DocumentWriter::new(dir.path().join("missing"));

        let result = tokio_test::block_on(writer.write("a.md", "x"));
        assert!(matches!(
            result,
            Err(AppError::File(crate::error::FileError::WriteFailed { .. }))
        ));
    }
}
