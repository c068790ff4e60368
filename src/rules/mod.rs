//! # 替换规则模块
//!
//! 定义字面量替换规则 (pattern -> replacement) 及其应用方式。
//!
//! ## 功能
//! - 内置 SQL Server -> PostgreSQL 规则集
//! - 按顺序逐条应用，后一条规则作用于前一条的输出
//! - 从 CSV 文件加载外部规则集
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/` 使用
//! - 子模块: loader

pub mod loader;

pub use loader::load_rules_csv;

use crate::error::{PgfixError, Result};

/// 单条字面量替换规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pattern: String,
    replacement: String,
}

impl Rule {
    /// 创建规则，拒绝空 pattern
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(PgfixError::InvalidRule(
                "pattern must not be empty".to_string(),
            ));
        }
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// 文本中是否包含该规则的 pattern（区分大小写）
    pub fn matches(&self, text: &str) -> bool {
        text.contains(&self.pattern)
    }

    /// 替换所有不重叠的出现位置，从左到右
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.pattern, &self.replacement)
    }
}

/// 内置规则: (pattern, replacement)，按应用顺序排列
const BUILTIN: &[(&str, &str)] = &[
    ("GETUTCDATE()", "NOW()"),
    (
        r#"HasColumnType("datetime")"#,
        r#"HasColumnType("timestamp with time zone")"#,
    ),
    (r#"HasColumnType("NVARCHAR(MAX)")"#, r#"HasColumnType("text")"#),
    (r#"HasColumnType("nvarchar(max)")"#, r#"HasColumnType("text")"#),
];

/// 内置 SQL Server -> PostgreSQL 规则集
pub fn builtin_rules() -> Vec<Rule> {
    BUILTIN
        .iter()
        .map(|(pattern, replacement)| Rule {
            pattern: (*pattern).to_string(),
            replacement: (*replacement).to_string(),
        })
        .collect()
}

/// 按顺序应用规则集
pub fn apply_rules(text: &str, rules: &[Rule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
