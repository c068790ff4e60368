//! # rules 子命令 CLI 定义
//!
//! 列出当前生效的替换规则
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rules.rs`

use clap::Args;
use std::path::PathBuf;

/// rules 子命令参数
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// CSV file (pattern,replacement) to list instead of the built-in rules
    #[arg(short, long)]
    pub rules: Option<PathBuf>,
}
