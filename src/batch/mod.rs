//! # 批量处理模块
//!
//! 提供映射文件的批量修补能力。
//!
//! ## 功能
//! - 收集目标目录中的映射文件
//! - 顺序应用替换规则
//! - 内容变化时回写并统计
//!
//! ## 依赖关系
//! - 被 `commands/fix.rs` 使用
//! - 使用 `rules/` 应用替换规则

pub mod collector;
pub mod runner;

pub use runner::Patcher;
