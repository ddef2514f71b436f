use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use exam_seating::utils::logging;
use exam_seating::{AllocationRequest, App, Config};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "考场座位分配", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// 数据目录，覆盖 SEATING_DATA_DIR
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 从 TOML 名单导入班级（同名班级会被替换）
    AddClass {
        class_name: String,
        roster: PathBuf,
    },
    /// 登记考场
    AddRoom {
        room_name: String,
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
    },
    /// 列出所有班级
    Classes,
    /// 查看班级
    Class { class_name: String },
    /// 列出所有考场
    Rooms,
    /// 查看考场
    Room { room_name: String },
    /// 为两个班级分配座位
    Allocate {
        class1: String,
        class2: String,
        room: String,
        /// 考试日期，默认今天
        #[arg(long)]
        date: Option<String>,
        /// 同时写入输出目录
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    let app = App::initialize(config)
        .await
        .context("初始化数据目录失败")?;

    match cli.command {
        Commands::AddClass { class_name, roster } => {
            let response = app
                .add_class(&class_name, &roster)
                .await
                .with_context(|| format!("导入班级 '{}' 失败", class_name))?;
            print_json(&response)?;
        }
        Commands::AddRoom {
            room_name,
            rows,
            cols,
        } => {
            let response = app
                .add_room(&room_name, rows, cols)
                .await
                .with_context(|| format!("登记考场 '{}' 失败", room_name))?;
            print_json(&response)?;
        }
        Commands::Classes => print_json(&app.list_classes().await?)?,
        Commands::Class { class_name } => print_json(&app.get_class(&class_name).await?)?,
        Commands::Rooms => print_json(&app.list_rooms().await?)?,
        Commands::Room { room_name } => print_json(&app.get_room(&room_name).await?)?,
        Commands::Allocate {
            class1,
            class2,
            room,
            date,
            save,
        } => {
            let mut request = AllocationRequest::new(class1, class2, room);
            if let Some(date) = date {
                request = request.with_date(date);
            }

            let (report, _saved) = app
                .allocate(&request, save)
                .await
                .with_context(|| format!("{} 分配座位失败", request))?;
            print_json(&report)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
