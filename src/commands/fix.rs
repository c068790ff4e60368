//! # fix 命令实现
//!
//! 将映射文件中的 SQL Server 列语法替换为 PostgreSQL 语法。
//!
//! ## 功能
//! - 收集目标目录中的映射文件
//! - 顺序应用替换规则
//! - 内容变化时原地写回并输出 `Fixed: <filename>`
//! - 全部处理完后输出一行完成信息
//!
//! ## 依赖关系
//! - 使用 `cli/fix.rs` 定义的参数
//! - 使用 `batch/`, `rules/`
//! - 使用 `utils/output.rs`

use crate::batch::Patcher;
use crate::cli::fix::FixArgs;
use crate::error::Result;
use crate::utils::output;

use std::io::{self, Write};

/// 执行 fix 命令
pub fn execute(args: FixArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_to(args, &mut out)
}

/// 执行 fix 命令，结果写入 `out`
fn execute_to<W: Write>(args: FixArgs, out: &mut W) -> Result<()> {
    let rules = super::resolve_rules(args.rules.as_deref())?;
    let patcher = Patcher::new(args.dir, &args.ext, rules);

    let report = patcher.run(|name| output::write_fixed(out, name))?;

    output::write_done(
        out,
        &format!(
            "All basic PostgreSQL fixes applied ({} of {} file(s) fixed, {} unchanged).",
            report.fixed.len(),
            report.total(),
            report.unchanged
        ),
    )
}
