//! 基础设施层（Infrastructure）
//!
//! 持有数据目录，只暴露存取能力，不做座位分配。

pub mod class_store;
pub mod json_dir;
pub mod room_store;

pub use class_store::{AddClassOutcome, ClassStore};
pub use json_dir::JsonDir;
pub use room_store::{AddRoomOutcome, RoomStore};
