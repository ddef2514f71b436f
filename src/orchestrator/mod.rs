//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层是命令行的入口，负责初始化存储并分派命令。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (分派命令)
//!     ↓
//! workflow::AllocationFlow (一次分配)
//!     ↓
//! services::allocate (纯函数：名单 + 考场 → 座位表)
//!     ↓
//! infrastructure (ClassStore / RoomStore)
//! ```

pub mod app;
pub mod responses;

pub use app::App;
pub use responses::{AddClassResponse, AddRoomResponse, ClassList, RoomList};
