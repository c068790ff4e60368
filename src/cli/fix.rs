//! # fix 子命令 CLI 定义
//!
//! 对目标目录中的映射文件应用替换规则并原地写回
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/fix.rs`

use clap::Args;
use std::path::PathBuf;

/// 默认目标目录
pub const DEFAULT_DIR: &str = "YemenBooking.Infrastructure/Data/Configurations";

/// 默认映射文件扩展名
pub const DEFAULT_EXT: &str = ".cs";

/// fix 子命令参数
#[derive(Args, Debug)]
pub struct FixArgs {
    /// Directory containing the mapping files
    #[arg(short, long, env = "PGFIX_DIR", default_value = DEFAULT_DIR)]
    pub dir: PathBuf,

    /// File name suffix of mapping files (case-sensitive)
    #[arg(short, long, default_value = DEFAULT_EXT)]
    pub ext: String,

    /// CSV file (pattern,replacement) replacing the built-in rules
    #[arg(short, long)]
    pub rules: Option<PathBuf>,
}
