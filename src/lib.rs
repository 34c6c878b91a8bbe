//! # Gaokao Recite
//!
//! 把高考名句名篇默写的三张数据表（课本、背诵篇目、高考真题）整理成三份 Markdown 文档：
//! 按年份排序的题目汇编、按篇目归类并嵌入答案的题目汇编、带高频排行榜的总览。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 课本、篇目、真题的数据结构与只读目录 `Catalog`
//! - `models/loaders` - CSV 加载，全部成功或全部失败
//!
//! ### ② 能力层（Services）
//! - `TitleNormalizer` - 篇目名称规范化（书名号、括号注释、别名）
//! - `AnswerFiller` - 把答案片段填入 `{n}` 占位符
//! - `Frequency` - 考查频次统计与排行
//!
//! ### ③ 文档层（Reports）
//! - `reports/` - 三份文档的纯文本渲染，不做 I/O
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 加载 → 渲染 → 写入，严格顺序执行
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod reports;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Catalog, ContentId, ExamQuestion, Piece, Textbook};
pub use orchestrator::{App, RunReport};
