/// 日志工具模块
///
/// 提供日志初始化以及格式化输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::workflow::allocation_request::{SeatingReport, SeatingStats};

/// 初始化日志
///
/// 优先使用 `RUST_LOG`；未设置时默认 `info`，详细模式为 `debug`。
/// 重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 考场座位分配 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("📁 数据目录: {}", config.data_dir.display());
    info!("{}", "=".repeat(60));
}

/// 记录分配结果统计
pub fn log_allocation_summary(report: &SeatingReport, stats: &SeatingStats) {
    info!("\n{}", "─".repeat(60));
    info!(
        "📊 考场 {} | {} ({}) + {} ({})",
        report.hall,
        report.class1,
        report.total_students_class1,
        report.class2,
        report.total_students_class2
    );
    info!(
        "🪑 {} 行 × {} 列，容量 {}",
        report.room_configuration.rows,
        report.room_configuration.cols,
        report.room_configuration.total_capacity
    );
    info!(
        "✅ 双人凳: {} | 单人凳: {} | 空凳: {}",
        stats.paired_benches, stats.single_benches, stats.empty_benches
    );
    if stats.same_course_benches > 0 {
        info!("⚠️ 同课程同桌: {} 张长凳", stats.same_course_benches);
    }
    info!("{}", "─".repeat(60));
}
