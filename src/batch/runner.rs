//! # 批量修补执行器
//!
//! 顺序执行 读取 -> 应用规则 -> 比较 -> 回写。
//!
//! ## 功能
//! - 逐个文件处理，不并行
//! - 内容变化时才覆盖写回
//! - 遇到第一个错误立即中止（已写回的文件保持修改）
//!
//! ## 依赖关系
//! - 被 `commands/fix.rs` 调用
//! - 使用 `batch/collector.rs` 收集文件
//! - 使用 `rules/` 应用替换规则

use super::collector::FileCollector;
use crate::error::{PgfixError, Result};
use crate::rules::{apply_rules, Rule};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 内容未变化，未写回
    Unchanged,
    /// 内容已变化并覆盖写回
    Fixed,
}

/// 一次运行的结果统计
#[derive(Debug, Default)]
pub struct PatchReport {
    /// 已修复的文件名（按处理顺序）
    pub fixed: Vec<String>,
    /// 未变化的文件数量
    pub unchanged: usize,
}

impl PatchReport {
    /// 合并单个文件的处理结果
    pub fn merge(&mut self, name: String, outcome: Outcome) {
        match outcome {
            Outcome::Fixed => self.fixed.push(name),
            Outcome::Unchanged => self.unchanged += 1,
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.fixed.len() + self.unchanged
    }
}

/// 批量文本修补器
pub struct Patcher {
    collector: FileCollector,
    rules: Vec<Rule>,
}

impl Patcher {
    /// 创建新的修补器
    pub fn new(dir: PathBuf, extension: &str, rules: Vec<Rule>) -> Self {
        Self {
            collector: FileCollector::new(dir, extension),
            rules,
        }
    }

    /// 列出候选文件
    pub fn list_candidates(&self) -> Result<Vec<PathBuf>> {
        self.collector.collect()
    }

    /// 处理所有候选文件；每修复一个文件立即回调 `on_fixed`
    pub fn run<F>(&self, mut on_fixed: F) -> Result<PatchReport>
    where
        F: FnMut(&str) -> Result<()>,
    {
        let files = self.list_candidates()?;
        let mut report = PatchReport::default();

        for path in &files {
            let name = file_name(path);
            let outcome = self.patch_file(path)?;
            if outcome == Outcome::Fixed {
                on_fixed(&name)?;
            }
            report.merge(name, outcome);
        }

        Ok(report)
    }

    /// 处理单个文件
    pub fn patch_file(&self, path: &Path) -> Result<Outcome> {
        let original = load(path)?;
        if !self.rules.iter().any(|rule| rule.matches(&original)) {
            return Ok(Outcome::Unchanged);
        }
        let transformed = apply_rules(&original, &self.rules);
        maybe_write(path, &original, &transformed)
    }
}

/// 以 UTF-8 读取整个文件
pub fn load(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => PgfixError::DecodeError {
            path: path.display().to_string(),
            source: e,
        },
        _ => PgfixError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })
}

/// 内容变化时覆盖写回
pub fn maybe_write(path: &Path, original: &str, transformed: &str) -> Result<Outcome> {
    if transformed == original {
        return Ok(Outcome::Unchanged);
    }

    fs::write(path, transformed).map_err(|e| PgfixError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Outcome::Fixed)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
