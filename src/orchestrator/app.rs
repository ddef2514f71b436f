//! 应用 - 编排层
//!
//! ## 职责
//!
//! 持有配置与两个存储，把命令行命令分派到存储或分配流程。
//! 不做具体的分配判断。

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{ClassStore, RoomStore};
use crate::models::loaders::load_roster_toml;
use crate::models::records::{ClassRecord, RoomRecord};
use crate::orchestrator::responses::{AddClassResponse, AddRoomResponse, ClassList, RoomList};
use crate::utils::logging;
use crate::workflow::{AllocationFlow, AllocationRequest, SeatingReport};

/// 应用主结构
pub struct App {
    config: Config,
    classes: ClassStore,
    rooms: RoomStore,
}

impl App {
    /// 初始化应用，数据目录不存在时自动创建
    pub async fn initialize(config: Config) -> AppResult<Self> {
        logging::log_startup(&config);

        let classes = ClassStore::open(&config.data_dir).await?;
        let rooms = RoomStore::open(&config.data_dir).await?;

        Ok(Self {
            config,
            classes,
            rooms,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 从 TOML 名单文件导入班级
    pub async fn add_class(&self, class_name: &str, roster_file: &Path) -> AppResult<AddClassResponse> {
        let roster = load_roster_toml(roster_file).await?;
        let outcome = self.classes.add_class(class_name, roster).await?;

        let action = if outcome.replaced { "replaced" } else { "added" };
        Ok(AddClassResponse {
            message: format!("Class '{}' {} successfully", class_name, action),
            class_name: class_name.to_string(),
            total_students: outcome.record.total_students,
            file_saved: outcome.path.display().to_string(),
            replaced: outcome.replaced,
            data: outcome.record,
        })
    }

    pub async fn add_room(&self, room_name: &str, rows: usize, cols: usize) -> AppResult<AddRoomResponse> {
        let outcome = self.rooms.add_room(room_name, rows, cols).await?;

        Ok(AddRoomResponse {
            message: format!("Room '{}' added successfully", room_name),
            room_name: room_name.to_string(),
            total_capacity: outcome.record.configuration.total_capacity,
            file_saved: outcome.path.display().to_string(),
            data: outcome.record,
        })
    }

    pub async fn list_classes(&self) -> AppResult<ClassList> {
        let classes = self.classes.list_classes().await?;
        Ok(ClassList {
            total_classes: classes.len(),
            classes,
        })
    }

    pub async fn get_class(&self, class_name: &str) -> AppResult<ClassRecord> {
        self.classes.get_class(class_name).await
    }

    pub async fn list_rooms(&self) -> AppResult<RoomList> {
        let rooms = self.rooms.list_rooms().await?;
        Ok(RoomList {
            total_rooms: rooms.len(),
            rooms,
        })
    }

    pub async fn get_room(&self, room_name: &str) -> AppResult<RoomRecord> {
        self.rooms.get_room(room_name).await
    }

    /// 分配座位，`save` 为真时同时写入输出目录
    pub async fn allocate(
        &self,
        request: &AllocationRequest,
        save: bool,
    ) -> AppResult<(SeatingReport, Option<PathBuf>)> {
        let flow = AllocationFlow::new(&self.config, self.classes.clone(), self.rooms.clone());
        let report = flow.run(request).await?;

        let saved = if save {
            Some(flow.save_report(&report).await?)
        } else {
            None
        };

        info!("✓ {} 分配完成", request);
        Ok((report, saved))
    }
}
