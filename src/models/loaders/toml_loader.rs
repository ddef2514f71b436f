use crate::error::RosterError;
use crate::models::student::{ClassRoster, Student};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 必需的列
const REQUIRED_COLUMNS: [&str; 2] = ["roll_no", "course"];

/// 名单文件结构：`[[students]]` 表数组，每行一名考生
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    students: Vec<toml::Table>,
}

/// 从 TOML 文件加载班级名单
pub async fn load_roster_toml(path: &Path) -> Result<ClassRoster, RosterError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| RosterError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

    let students = parse_roster_toml(&content)?;
    tracing::info!(
        "从 {} 加载 {} 名考生",
        path.file_name().unwrap_or_default().to_string_lossy(),
        students.len()
    );

    Ok(ClassRoster::new(students))
}

/// 解析 TOML 名单内容
///
/// 列名不区分大小写，首尾空白会被去掉，中间空格视为下划线；
/// 学号或课程为空的行会被跳过。
pub fn parse_roster_toml(content: &str) -> Result<Vec<Student>, RosterError> {
    let file: RosterFile = toml::from_str(content)?;

    let rows: Vec<Vec<(String, &toml::Value)>> = file
        .students
        .iter()
        .map(|row| {
            row.iter()
                .map(|(key, value)| (normalize_column(key), value))
                .collect()
        })
        .collect();

    let mut available: Vec<String> = Vec::new();
    for (key, _) in rows.iter().flatten() {
        if !available.contains(key) {
            available.push(key.clone());
        }
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !available.iter().any(|key| key == *col))
        .map(|col| col.to_string())
        .collect();

    if !rows.is_empty() && !missing.is_empty() {
        return Err(RosterError::MissingColumns { missing, available });
    }

    let mut students = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let roll_no = cell(row, "roll_no");
        let course = cell(row, "course");

        match (roll_no, course) {
            (Some(roll_no), Some(course)) => students.push(Student { roll_no, course }),
            _ => tracing::debug!("跳过第 {} 行: 学号或课程为空", idx + 1),
        }
    }

    if students.is_empty() {
        return Err(RosterError::NoStudents);
    }

    Ok(students)
}

fn normalize_column(key: &str) -> String {
    key.trim().to_lowercase().replace(' ', "_")
}

/// f64 能精确表示的最大整数 (2^53)
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

/// 读取单元格文本，空值返回 None
fn cell(row: &[(String, &toml::Value)], column: &str) -> Option<String> {
    let value = row.iter().find(|(key, _)| key == column).map(|(_, v)| *v)?;

    let text = match value {
        toml::Value::String(s) => s.trim().to_string(),
        toml::Value::Integer(i) => i.to_string(),
        // 只有可精确表示的整数才按整数输出，其余保留浮点文本
        toml::Value::Float(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT_INT => {
            format!("{}", *f as i64)
        }
        toml::Value::Float(f) => f.to_string(),
        _ => return None,
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
