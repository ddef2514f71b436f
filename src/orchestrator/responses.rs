//! 命令输出结构
//!
//! 每个命令的结果以 JSON 输出到标准输出。

use serde::Serialize;

use crate::models::records::{ClassRecord, ClassSummary, RoomRecord, RoomSummary};

#[derive(Debug, Clone, Serialize)]
pub struct AddClassResponse {
    pub message: String,
    pub class_name: String,
    pub total_students: usize,
    pub file_saved: String,
    pub replaced: bool,
    pub data: ClassRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddRoomResponse {
    pub message: String,
    pub room_name: String,
    pub total_capacity: usize,
    pub file_saved: String,
    pub data: RoomRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassList {
    pub total_classes: usize,
    pub classes: Vec<ClassSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomList {
    pub total_rooms: usize,
    pub rooms: Vec<RoomSummary>,
}
