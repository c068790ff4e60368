//! # pgfix - SQL Server -> PostgreSQL 映射文件迁移工具
//!
//! 扫描 EF Core 映射配置目录，对每个映射文件按顺序应用字面量替换规则，
//! 内容有变化时原地写回。
//!
//! ## 子命令
//! - `fix`   - 修补映射文件（默认）
//! - `rules` - 列出替换规则
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (文件收集与修补)
//!   │     └── rules/   (替换规则)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod rules;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&e);
        std::process::exit(1);
    }
}
