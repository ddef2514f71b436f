//! 分配请求与座位表报告

use serde::{Deserialize, Serialize};

use crate::models::room::RoomConfiguration;
use crate::models::seating::SeatingGrid;

/// 分配请求：两个班级、一个考场、可选的考试日期
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub class1_name: String,
    pub class2_name: String,
    pub room_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl AllocationRequest {
    pub fn new(
        class1_name: impl Into<String>,
        class2_name: impl Into<String>,
        room_name: impl Into<String>,
    ) -> Self {
        Self {
            class1_name: class1_name.into(),
            class2_name: class2_name.into(),
            room_name: room_name.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

impl std::fmt::Display for AllocationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} + {} @ {}]",
            self.class1_name, self.class2_name, self.room_name
        )
    }
}

/// 座位表报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingReport {
    /// 考场名称
    pub hall: String,
    pub date: String,
    pub grid: SeatingGrid,
    pub class1: String,
    pub class2: String,
    pub total_students_class1: usize,
    pub total_students_class2: usize,
    pub room_configuration: RoomConfiguration,
}

/// 座位表统计（仅用于日志）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatingStats {
    pub paired_benches: usize,
    pub single_benches: usize,
    pub empty_benches: usize,
    /// 同课程同桌的长凳数
    pub same_course_benches: usize,
}
