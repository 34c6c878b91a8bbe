//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 把一次生成串成固定的顺序：加载三张表 → 准备输出目录 → 依次生成并写入三份文档。
//! 不做任何并发，也不包含文档格式逻辑。
//!
//! ## 层次关系
//!
//! ```text
//! generator::App (一次完整生成)
//!     ↓
//! models::loaders (读取数据表) / reports (渲染文档)
//!     ↓
//! document_writer::DocumentWriter (写入文件)
//! ```

pub mod document_writer;
pub mod generator;

pub use document_writer::DocumentWriter;
pub use generator::{App, RunReport, WrittenDocument};
