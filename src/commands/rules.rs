//! # rules 命令实现
//!
//! 以表格形式列出当前生效的替换规则（按应用顺序编号）。
//!
//! ## 依赖关系
//! - 使用 `cli/rules.rs` 定义的参数
//! - 使用 `tabled` 输出表格

use crate::cli::rules::RulesArgs;
use crate::error::Result;
use crate::rules::Rule;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 规则表格行
#[derive(Debug, Clone, Tabled)]
struct RuleRow {
    #[tabled(rename = "#")]
    order: usize,
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(rename = "Replacement")]
    replacement: String,
}

/// 执行 rules 命令
pub fn execute(args: RulesArgs) -> Result<()> {
    let source = match &args.rules {
        Some(path) => format!("'{}'", path.display()),
        None => "built-in".to_string(),
    };
    let rules = super::resolve_rules(args.rules.as_deref())?;

    output::print_header(&format!("Replacement Rules ({})", source));
    println!("{}", Table::new(rule_rows(&rules)));

    Ok(())
}

fn rule_rows(rules: &[Rule]) -> Vec<RuleRow> {
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleRow {
            order: i + 1,
            pattern: rule.pattern().to_string(),
            replacement: rule.replacement().to_string(),
        })
        .collect()
}
