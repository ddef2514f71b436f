//! 持久化记录
//!
//! 班级与考场以 JSON 文件保存，字段名与已有数据文件保持一致。

use serde::{Deserialize, Serialize};

use crate::models::room::{RoomConfiguration, RoomLayout};
use crate::models::student::{ClassRoster, Student};

/// 班级记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub class_name: String,
    pub uploaded_at: String,
    pub total_students: usize,
    #[serde(default)]
    pub students: Vec<Student>,
}

impl ClassRecord {
    /// 按上传顺序生成名单
    pub fn roster(&self) -> ClassRoster {
        ClassRoster::new(self.students.clone())
    }
}

/// 班级列表条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub class_name: String,
    pub uploaded_at: String,
    pub total_students: usize,
    pub file: String,
}

/// 考场记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub room_name: String,
    pub created_at: String,
    pub configuration: RoomConfiguration,
    pub layout: RoomLayout,
}

/// 考场列表条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub room_name: String,
    pub created_at: String,
    pub total_capacity: usize,
    pub file: String,
}
