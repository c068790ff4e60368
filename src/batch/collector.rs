//! # 文件收集器
//!
//! 收集目标目录下所有映射文件（按扩展名后缀匹配）。
//!
//! ## 功能
//! - 只扫描目录的直接子项，不递归
//! - 区分大小写的精确后缀匹配
//! - 按文件名排序，保证输出顺序确定
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{PgfixError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 映射文件收集器
pub struct FileCollector {
    /// 目标目录
    dir: PathBuf,
    /// 文件名后缀
    extension: String,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(dir: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            dir,
            extension: extension.into(),
        }
    }

    /// 收集所有候选文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Err(PgfixError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }
        if !self.dir.is_dir() {
            return Err(PgfixError::NotADirectory {
                path: self.dir.display().to_string(),
            });
        }

        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| PgfixError::FileReadError {
                path: self.dir.display().to_string(),
                source: e.into(),
            })?;

            // 符号链接按其目标判断
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());

            if is_file && self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// 检查文件名是否以扩展名结尾（按字节比较，文件名不要求是 UTF-8）
    fn matches(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => name
                .as_encoded_bytes()
                .ends_with(self.extension.as_bytes()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_collect_filters_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("UserConfiguration.cs"), "").unwrap();
        fs::write(dir.path().join("BookingConfiguration.cs"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("Upper.CS"), "").unwrap();
        fs::write(dir.path().join("backup.cs.bak"), "").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf(), ".cs")
            .collect()
            .unwrap();
        assert_eq!(
            names(&files),
            vec!["BookingConfiguration.cs", "UserConfiguration.cs"]
        );
    }

    #[test]
    fn test_collect_ignores_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Nested.cs")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("Inner.cs"), "").unwrap();
        fs::write(dir.path().join("Top.cs"), "").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf(), ".cs")
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["Top.cs"]);
    }

    #[test]
    fn test_collect_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileCollector::new(dir.path().join("missing"), ".cs").collect();
        assert!(matches!(result, Err(PgfixError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_collect_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("A.cs");
        fs::write(&file, "").unwrap();
        let result = FileCollector::new(file, ".cs").collect();
        assert!(matches!(result, Err(PgfixError::NotADirectory { .. })));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_collect_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"\xffMap.cs")), "").unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"\xffMap.txt")), "").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf(), ".cs")
            .collect()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(
            files[0].file_name().unwrap().as_encoded_bytes(),
            b"\xffMap.cs"
        );
    }
}
