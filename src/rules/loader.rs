//! # 外部规则文件加载
//!
//! 从 CSV 文件读取规则集，表头为 `pattern,replacement`，保持文件中的顺序。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `csv` + `serde` 反序列化

use super::Rule;
use crate::error::{PgfixError, Result};

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// CSV 中的一行规则
#[derive(Debug, Deserialize)]
struct RuleRecord {
    pattern: String,
    replacement: String,
}

/// 从 CSV 文件加载规则集
pub fn load_rules_csv(path: &Path) -> Result<Vec<Rule>> {
    let file = std::fs::File::open(path).map_err(|e| PgfixError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let rules = parse_rules(file)?;
    if rules.is_empty() {
        return Err(PgfixError::InvalidArgument(format!(
            "Rule file contains no rules: {}",
            path.display()
        )));
    }

    Ok(rules)
}

/// 解析 CSV 规则内容
fn parse_rules<R: Read>(reader: R) -> Result<Vec<Rule>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut rules = Vec::new();
    for (idx, record) in rdr.deserialize::<RuleRecord>().enumerate() {
        let record = record?;
        let rule = Rule::new(record.pattern, record.replacement).map_err(|_| {
            // 表头占第 1 行
            PgfixError::InvalidRule(format!("empty pattern on line {}", idx + 2))
        })?;
        rules.push(rule);
    }

    Ok(rules)
}
