//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `rules/`, `utils/`
//! - 子模块: fix, rules

pub mod fix;
pub mod rules;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::rules::{builtin_rules, load_rules_csv, Rule};

use std::path::Path;

/// 执行命令，未指定子命令时按顶层参数执行 fix
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Fix(args)) => fix::execute(args),
        Some(Commands::Rules(args)) => rules::execute(args),
        None => fix::execute(cli.fix),
    }
}

/// 解析生效的规则集：指定文件时替换内置规则
fn resolve_rules(path: Option<&Path>) -> Result<Vec<Rule>> {
    match path {
        Some(path) => load_rules_csv(path),
        None => Ok(builtin_rules()),
    }
}
