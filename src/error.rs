//! # 统一错误处理模块
//!
//! 定义 pgfix 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// pgfix 统一错误类型
#[derive(Error, Debug)]
pub enum PgfixError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("File is not valid UTF-8: {path}")]
    DecodeError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output")]
    OutputError(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 规则错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PgfixError>;
