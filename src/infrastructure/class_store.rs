//! 班级存储 - 基础设施层

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{AppResult, BusinessError, RosterError, StoreError};
use crate::infrastructure::json_dir::{file_name, safe_name, JsonDir};
use crate::models::records::{ClassRecord, ClassSummary};
use crate::models::student::ClassRoster;

/// 保存班级的结果
#[derive(Debug, Clone)]
pub struct AddClassOutcome {
    pub record: ClassRecord,
    pub path: PathBuf,
    /// 是否替换了同名的旧班级
    pub replaced: bool,
}

/// 班级存储
///
/// 每个班级只保留最新一份名单，重新上传时删除旧文件。
#[derive(Debug, Clone)]
pub struct ClassStore {
    dir: JsonDir,
}

impl ClassStore {
    /// 打开 `<data_dir>/classes`
    pub async fn open(data_dir: &Path) -> AppResult<Self> {
        let dir = JsonDir::open(data_dir.join("classes")).await?;
        Ok(Self { dir })
    }

    /// 保存班级名单，同名班级会被替换
    pub async fn add_class(&self, class_name: &str, roster: ClassRoster) -> AppResult<AddClassOutcome> {
        let safe = safe_name(class_name);
        if safe.is_empty() {
            return Err(BusinessError::EmptyName { kind: "班级" }.into());
        }
        if roster.is_empty() {
            return Err(RosterError::NoStudents.into());
        }

        let record = ClassRecord {
            class_name: class_name.to_string(),
            uploaded_at: chrono::Local::now().to_rfc3339(),
            total_students: roster.len(),
            students: roster.into_students(),
        };

        // 先写新文件再删旧文件，写入失败时旧名单仍然保留
        let existing = self.dir.files_for(&safe).await?;
        let replaced = !existing.is_empty();

        let path = self.dir.new_file_path(&safe).await?;
        self.dir.write(&path, &record).await?;

        for old in &existing {
            if let Err(e) = self.dir.remove(old).await {
                warn!("旧名单文件删除失败，读取时仍以最新文件为准: {}", e);
            }
        }

        info!(
            "✓ 班级 '{}' {}: {} 名考生",
            class_name,
            if replaced { "已替换" } else { "已添加" },
            record.total_students
        );

        Ok(AddClassOutcome {
            record,
            path,
            replaced,
        })
    }

    /// 列出所有班级，按上传时间倒序
    pub async fn list_classes(&self) -> AppResult<Vec<ClassSummary>> {
        let mut classes = Vec::new();

        for path in self.dir.json_files().await? {
            match self.dir.read::<ClassRecord>(&path).await {
                Ok(record) => classes.push(ClassSummary {
                    class_name: record.class_name,
                    uploaded_at: record.uploaded_at,
                    total_students: record.total_students,
                    file: file_name(&path),
                }),
                Err(e) => warn!("跳过无法读取的班级文件: {}", e),
            }
        }

        classes.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(classes)
    }

    /// 读取班级的最新记录
    pub async fn get_class(&self, class_name: &str) -> AppResult<ClassRecord> {
        let path = self
            .dir
            .latest(&safe_name(class_name))
            .await?
            .ok_or_else(|| StoreError::class_not_found(class_name))?;

        Ok(self.dir.read(&path).await?)
    }
}
