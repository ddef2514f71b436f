//! 座位分配流程 - 流程层
//!
//! 核心职责：定义"一次分配"的完整流程
//!
//! 流程顺序：
//! 1. 读取两个班级和考场
//! 2. 校验（班级非空、考场配置合法、人数不超过容量）
//! 3. 调用分配器
//! 4. 生成座位表报告

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppResult, BusinessError, StoreError};
use crate::infrastructure::{ClassStore, RoomStore};
use crate::models::records::ClassRecord;
use crate::models::seating::SeatingGrid;
use crate::services::allocate;
use crate::utils::logging;
use crate::workflow::allocation_request::{AllocationRequest, SeatingReport, SeatingStats};

/// 座位分配流程
///
/// - 从存储读取数据，交给分配器
/// - 不修改任何班级或考场数据
pub struct AllocationFlow {
    classes: ClassStore,
    rooms: RoomStore,
    config: Config,
}

impl AllocationFlow {
    pub fn new(config: &Config, classes: ClassStore, rooms: RoomStore) -> Self {
        Self {
            classes,
            rooms,
            config: config.clone(),
        }
    }

    pub async fn run(&self, request: &AllocationRequest) -> AppResult<SeatingReport> {
        info!("{} 开始分配座位", request);

        let class1 = self.classes.get_class(&request.class1_name).await?;
        let class2 = self.classes.get_class(&request.class2_name).await?;
        let room = self.rooms.get_room(&request.room_name).await?;

        ensure_not_empty(&class1, &request.class1_name)?;
        ensure_not_empty(&class2, &request.class2_name)?;

        let configuration = room.configuration;
        if configuration.rows == 0 || configuration.cols == 0 {
            return Err(BusinessError::InvalidRoom {
                name: request.room_name.clone(),
            }
            .into());
        }

        let total = class1.students.len() + class2.students.len();
        if total > configuration.total_capacity {
            warn!(
                "{} 考生总数 {} 超过考场容量 {}",
                request, total, configuration.total_capacity
            );
            return Err(BusinessError::CapacityExceeded {
                total,
                capacity: configuration.total_capacity,
            }
            .into());
        }

        let grid = allocate(&class1.roster(), &class2.roster(), configuration.shape())?;

        let date = match &request.date {
            Some(date) if !date.trim().is_empty() => date.clone(),
            _ => self.config.today_label(),
        };

        let report = SeatingReport {
            hall: room.room_name,
            date,
            grid,
            class1: request.class1_name.clone(),
            class2: request.class2_name.clone(),
            total_students_class1: class1.students.len(),
            total_students_class2: class2.students.len(),
            room_configuration: configuration,
        };

        let stats = seating_stats(&report.grid, &class1, &class2);
        logging::log_allocation_summary(&report, &stats);

        Ok(report)
    }

    /// 把座位表报告写入输出目录
    pub async fn save_report(&self, report: &SeatingReport) -> AppResult<PathBuf> {
        save_report(report, &self.config.output_dir).await
    }
}

/// 把座位表报告以 JSON 写入 `output_dir`
pub async fn save_report(report: &SeatingReport, output_dir: &Path) -> AppResult<PathBuf> {
    fs::create_dir_all(output_dir)
        .await
        .map_err(|source| StoreError::CreateDirFailed {
            path: output_dir.display().to_string(),
            source,
        })?;

    let file_name = format!(
        "seating_{}_{}.json",
        crate::infrastructure::json_dir::safe_name(&report.hall),
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = output_dir.join(file_name);

    let content = serde_json::to_string_pretty(report)
        .map_err(|source| StoreError::json(path.display().to_string(), source))?;
    fs::write(&path, content)
        .await
        .map_err(|source| StoreError::write_failed(path.display().to_string(), source))?;

    info!("座位表已保存至: {}", path.display());
    Ok(path)
}

fn ensure_not_empty(class: &ClassRecord, name: &str) -> AppResult<()> {
    if class.students.is_empty() {
        return Err(BusinessError::EmptyClass {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

/// 统计座位表
///
/// 双人凳的第一个座位来自班级1，第二个座位来自班级2。
pub fn seating_stats(grid: &SeatingGrid, class1: &ClassRecord, class2: &ClassRecord) -> SeatingStats {
    let courses1: HashMap<&str, &str> = class1
        .students
        .iter()
        .map(|s| (s.roll_no.as_str(), s.course.as_str()))
        .collect();
    let courses2: HashMap<&str, &str> = class2
        .students
        .iter()
        .map(|s| (s.roll_no.as_str(), s.course.as_str()))
        .collect();

    let mut stats = SeatingStats::default();
    for bench in grid.benches() {
        match bench.occupants() {
            [] => stats.empty_benches += 1,
            [_] => stats.single_benches += 1,
            [first, second, ..] => {
                stats.paired_benches += 1;
                let c1 = courses1.get(first.as_str());
                let c2 = courses2.get(second.as_str());
                if c1.is_some() && c1 == c2 {
                    stats.same_course_benches += 1;
                }
            }
        }
    }
    stats
}
