//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 模块使用
//! - 使用 `colored` crate
//! - `fix` 的标准输出只包含 `Fixed:` 行和最后的完成行

use crate::error::{PgfixError, Result};

use colored::Colorize;
use std::io::Write;

/// 打印错误消息（包含错误来源链）
pub fn print_error(err: &dyn std::error::Error) {
    eprintln!("{} {}", "[ERR]".red().bold(), err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("      {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }
}

/// 写出已修复文件行 `Fixed: <filename>`
pub fn write_fixed<W: Write>(out: &mut W, filename: &str) -> Result<()> {
    writeln!(out, "{} {}", "Fixed:".green(), filename).map_err(PgfixError::OutputError)
}

/// 写出完成消息（前置空行）
pub fn write_done<W: Write>(out: &mut W, msg: &str) -> Result<()> {
    writeln!(out)
        .and_then(|_| writeln!(out, "{} {}", "[DONE]".green().bold(), msg))
        .map_err(PgfixError::OutputError)
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
