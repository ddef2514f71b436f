//! 考场存储 - 基础设施层

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{AppResult, BusinessError, StoreError};
use crate::infrastructure::json_dir::{file_name, safe_name, JsonDir};
use crate::models::records::{RoomRecord, RoomSummary};
use crate::models::room::{RoomConfiguration, RoomLayout, RoomShape};

/// 保存考场的结果
#[derive(Debug, Clone)]
pub struct AddRoomOutcome {
    pub record: RoomRecord,
    pub path: PathBuf,
}

/// 考场存储
///
/// 同名考场保留历史文件，读取时取最新一份。
#[derive(Debug, Clone)]
pub struct RoomStore {
    dir: JsonDir,
}

impl RoomStore {
    /// 打开 `<data_dir>/rooms`
    pub async fn open(data_dir: &Path) -> AppResult<Self> {
        let dir = JsonDir::open(data_dir.join("rooms")).await?;
        Ok(Self { dir })
    }

    /// 登记考场
    pub async fn add_room(&self, room_name: &str, rows: usize, cols: usize) -> AppResult<AddRoomOutcome> {
        let safe = safe_name(room_name);
        if safe.is_empty() {
            return Err(BusinessError::EmptyName { kind: "考场" }.into());
        }
        let shape = RoomShape::new(rows, cols)?;

        let record = RoomRecord {
            room_name: room_name.to_string(),
            created_at: chrono::Local::now().to_rfc3339(),
            configuration: RoomConfiguration::from(shape),
            layout: RoomLayout::from(shape),
        };

        let path = self.dir.new_file_path(&safe).await?;
        self.dir.write(&path, &record).await?;

        info!(
            "✓ 考场 '{}' 已添加: {} 行 × {} 列，容量 {}",
            room_name, rows, cols, record.configuration.total_capacity
        );

        Ok(AddRoomOutcome { record, path })
    }

    /// 列出所有考场文件，按创建时间倒序
    pub async fn list_rooms(&self) -> AppResult<Vec<RoomSummary>> {
        let mut rooms = Vec::new();

        for path in self.dir.json_files().await? {
            match self.dir.read::<RoomRecord>(&path).await {
                Ok(record) => rooms.push(RoomSummary {
                    room_name: record.room_name,
                    created_at: record.created_at,
                    total_capacity: record.configuration.total_capacity,
                    file: file_name(&path),
                }),
                Err(e) => warn!("跳过无法读取的考场文件: {}", e),
            }
        }

        rooms.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rooms)
    }

    /// 读取考场的最新记录
    pub async fn get_room(&self, room_name: &str) -> AppResult<RoomRecord> {
        let path = self
            .dir
            .latest(&safe_name(room_name))
            .await?
            .ok_or_else(|| StoreError::room_not_found(room_name))?;

        Ok(self.dir.read(&path).await?)
    }
}
