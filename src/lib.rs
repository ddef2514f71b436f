//! # Exam Seating
//!
//! 为两个班级的考生分配考场长凳座位
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有数据目录，只暴露存取能力
//! - `ClassStore` / `RoomStore` - 班级名单与考场配置的 JSON 文件存储
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯计算，不做 I/O
//! - `allocate` - 轮转配对 + 同课程回避
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次分配"的完整流程
//! - `AllocationFlow` - 读取 → 校验 → 分配 → 生成报告
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 命令分派
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AllocationError, AppError, AppResult};
pub use infrastructure::{ClassStore, RoomStore};
pub use models::{Bench, ClassRoster, RoomShape, SeatingGrid, Student};
pub use orchestrator::App;
pub use services::allocate;
pub use workflow::{AllocationFlow, AllocationRequest, SeatingReport};
