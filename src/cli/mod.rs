//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `fix`: 修补映射文件（不带子命令时的默认行为）
//! - `rules`: 列出当前生效的替换规则
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: fix, rules

pub mod fix;
pub mod rules;

use clap::{Parser, Subcommand};

/// pgfix - SQL Server -> PostgreSQL 映射文件迁移工具
#[derive(Parser)]
#[command(name = "pgfix")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Rewrite EF Core mapping files from SQL Server to PostgreSQL column syntax",
    long_about = None
)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub fix: fix::FixArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Apply replacement rules to mapping files in place (default)
    Fix(fix::FixArgs),

    /// List the replacement rules in application order
    Rules(rules::RulesArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["pgfix"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_fix_args() {
        let cli = Cli::try_parse_from([
            "pgfix", "fix", "--dir", "Data/Mappings", "--ext", ".Map.cs", "--rules", "r.csv",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Fix(args)) => {
                assert_eq!(args.dir, PathBuf::from("Data/Mappings"));
                assert_eq!(args.ext, ".Map.cs");
                assert_eq!(args.rules, Some(PathBuf::from("r.csv")));
            }
            _ => panic!("expected fix subcommand"),
        }
    }

    #[test]
    fn test_bare_invocation_matches_fix_defaults() {
        // 两种调用方式都经由 clap 读取 PGFIX_DIR，不受环境影响
        let bare = Cli::try_parse_from(["pgfix"]).unwrap().fix;
        let cli = Cli::try_parse_from(["pgfix", "fix"]).unwrap();
        let Some(Commands::Fix(args)) = cli.command else {
            panic!("expected fix subcommand");
        };
        assert_eq!(bare.dir, args.dir);
        assert_eq!(bare.ext, args.ext);
        assert_eq!(bare.ext, fix::DEFAULT_EXT);
        assert_eq!(bare.rules, None);
    }

    #[test]
    fn test_top_level_fix_flags() {
        let cli = Cli::try_parse_from(["pgfix", "--dir", "Mappings", "--ext", ".Map.cs"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.fix.dir, PathBuf::from("Mappings"));
        assert_eq!(cli.fix.ext, ".Map.cs");
    }

    #[test]
    fn test_top_level_flags_conflict_with_subcommand() {
        assert!(Cli::try_parse_from(["pgfix", "--ext", ".vb", "rules"]).is_err());
    }

    #[test]
    fn test_rules_args() {
        let cli = Cli::try_parse_from(["pgfix", "rules"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Rules(rules::RulesArgs { rules: None }))
        ));
    }
}
