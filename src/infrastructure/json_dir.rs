//! JSON 目录 - 基础设施层
//!
//! 只负责"某个目录下按名称存取 JSON 文件"，不认识班级或考场。
//!
//! 文件名格式：`<安全名称>_<YYYYMMDD_HHMMSS>[_<序号>].json`，
//! 同一秒内重复写入时追加序号避免覆盖。

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::error::StoreError;

/// JSON 文件目录
#[derive(Debug, Clone)]
pub struct JsonDir {
    dir: PathBuf,
}

impl JsonDir {
    /// 打开目录，不存在时自动创建
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| StoreError::CreateDirFailed {
                path: dir.display().to_string(),
                source,
            })?;
        Ok(Self { dir })
    }

    /// 为名称生成一个新的、未被占用的文件路径
    pub async fn new_file_path(&self, safe_name: &str) -> Result<PathBuf, StoreError> {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let mut path = self.dir.join(format!("{}_{}.json", safe_name, stamp));
        let mut seq = 1;
        while fs::try_exists(&path)
            .await
            .map_err(|source| StoreError::read_failed(path.display().to_string(), source))?
        {
            path = self
                .dir
                .join(format!("{}_{}_{}.json", safe_name, stamp, seq));
            seq += 1;
        }
        Ok(path)
    }

    /// 列出属于某个名称的全部文件（按写入时间从旧到新）
    pub async fn files_for(&self, safe_name: &str) -> Result<Vec<PathBuf>, StoreError> {
        let pattern = match file_pattern(safe_name) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!("无法为名称 {} 构造文件匹配规则: {}", safe_name, e);
                return Ok(Vec::new());
            }
        };
        let mut matched: Vec<(String, u64, PathBuf)> = Vec::new();

        for path in self.json_files().await? {
            let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(caps) = pattern.captures(file_name) {
                let stamp = caps[1].to_string();
                let seq = caps
                    .get(2)
                    .and_then(|m| m.as_str().parse().ok())
                    .unwrap_or(0);
                matched.push((stamp, seq, path));
            }
        }

        matched.sort();
        Ok(matched.into_iter().map(|(_, _, path)| path).collect())
    }

    /// 某个名称最新的文件
    pub async fn latest(&self, safe_name: &str) -> Result<Option<PathBuf>, StoreError> {
        Ok(self.files_for(safe_name).await?.pop())
    }

    /// 目录下全部 `.json` 文件
    pub async fn json_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let read_failed = |source| StoreError::read_failed(self.dir.display().to_string(), source);

        let mut entries = fs::read_dir(&self.dir).await.map_err(read_failed)?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(read_failed)? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    pub async fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<T, StoreError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::read_failed(path.display().to_string(), source))?;
        serde_json::from_str(&content)
            .map_err(|source| StoreError::json(path.display().to_string(), source))
    }

    pub async fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(value)
            .map_err(|source| StoreError::json(path.display().to_string(), source))?;
        fs::write(path, content)
            .await
            .map_err(|source| StoreError::write_failed(path.display().to_string(), source))?;
        debug!("已写入: {}", path.display());
        Ok(())
    }

    pub async fn remove(&self, path: &Path) -> Result<(), StoreError> {
        fs::remove_file(path)
            .await
            .map_err(|source| StoreError::DeleteFailed {
                path: path.display().to_string(),
                source,
            })
    }
}

/// 把名称转换为可用作文件名的形式
///
/// 只保留字母数字、空格、`-`、`_`，去掉首尾空白后把空格替换为 `_`。
pub fn safe_name(name: &str) -> String {
    name.chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .replace(' ', "_")
}

/// 路径中的文件名部分
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn file_pattern(safe_name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"^{}_(\d{{8}}_\d{{6}})(?:_(\d+))?\.json$",
        regex::escape(safe_name)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_name() {
        assert_eq!(safe_name(" Hall A/1 "), "Hall_A1");
        assert_eq!(safe_name("CSE-3rd_year"), "CSE-3rd_year");
        assert_eq!(safe_name("!!!"), "");
    }

    #[tokio::test]
    async fn test_new_file_path_skips_taken_names() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = JsonDir::open(tmp.path()).await.unwrap();

        let first = dir.new_file_path("Hall").await.unwrap();
        dir.write(&first, &serde_json::json!({})).await.unwrap();
        let second = dir.new_file_path("Hall").await.unwrap();
        assert_ne!(first, second);

        dir.write(&second, &serde_json::json!({})).await.unwrap();
        let files = dir.files_for("Hall").await.unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files.last(), Some(&second));
    }

    #[test]
    fn test_file_pattern_requires_exact_name() {
        let pattern = file_pattern("Hall_A").unwrap();
        assert!(pattern.is_match("Hall_A_20250101_093000.json"));
        assert!(pattern.is_match("Hall_A_20250101_093000_2.json"));
        assert!(!pattern.is_match("Hall_AB_20250101_093000.json"));
        assert!(!pattern.is_match("Hall_A_B_20250101_093000.json"));
    }
}
