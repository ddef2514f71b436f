use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 座位分配错误
    #[error("分配错误: {0}")]
    Allocation(#[from] AllocationError),
    /// 名单导入错误
    #[error("名单错误: {0}")]
    Roster(#[from] RosterError),
    /// 存储错误
    #[error("存储错误: {0}")]
    Store(#[from] StoreError),
    /// 业务逻辑错误
    #[error("业务错误: {0}")]
    Business(#[from] BusinessError),
}

/// 座位分配错误
///
/// 所有校验都在落座之前完成，出错时不会返回半成品座位表。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// 考生总数超过座位数
    #[error("考生总数 {} (班级1: {class1}, 班级2: {class2}) 超过考场容量 {capacity}", .class1 + .class2)]
    CapacityExceeded {
        class1: usize,
        class2: usize,
        capacity: usize,
    },
    /// 单人凳规则下长凳数量不足
    #[error("至少需要 {required} 张长凳，考场只有 {available} 张")]
    InsufficientBenches { required: usize, available: usize },
    /// 考场形状非法
    #[error("考场形状非法: {rows} 行 × {cols} 列，行列都必须为正整数")]
    InvalidShape { rows: usize, cols: usize },
    /// 考场过大
    #[error("考场过大: {rows} 行 × {cols} 列，长凳数超过上限 {}", crate::models::room::MAX_BENCHES)]
    ShapeTooLarge { rows: usize, cols: usize },
    /// 两个班级都没有考生
    #[error("两个班级都没有考生")]
    EmptyRoster,
}

impl AllocationError {
    /// 超出的人数或长凳数
    pub fn overflow(&self) -> Option<usize> {
        match self {
            AllocationError::CapacityExceeded {
                class1,
                class2,
                capacity,
            } => Some(class1 + class2 - capacity),
            AllocationError::InsufficientBenches {
                required,
                available,
            } => Some(required - available),
            _ => None,
        }
    }
}

/// 名单导入错误
#[derive(Debug, Error)]
pub enum RosterError {
    /// 缺少必需的列
    #[error("缺少必需的列: {}。现有列: {}", .missing.join(", "), .available.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },
    /// 没有有效的考生数据
    #[error("名单中没有有效的考生数据")]
    NoStudents,
    /// 读取名单文件失败
    #[error("读取名单文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败: {0}")]
    TomlParseFailed(#[from] toml::de::Error),
}

/// 存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 记录不存在
    #[error("{kind} '{name}' 不存在")]
    NotFound { kind: &'static str, name: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 删除文件失败
    #[error("删除文件失败 ({path}): {source}")]
    DeleteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析或序列化失败
    #[error("JSON处理失败 ({path}): {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 业务逻辑错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessError {
    /// 名称为空
    #[error("{kind}名称不能为空")]
    EmptyName { kind: &'static str },
    /// 班级没有考生
    #[error("班级 '{name}' 没有考生")]
    EmptyClass { name: String },
    /// 考场配置非法
    #[error("考场 '{name}' 配置非法")]
    InvalidRoom { name: String },
    /// 考生总数超过考场登记容量
    #[error("考生总数 ({total}) 超过考场容量 ({capacity})")]
    CapacityExceeded { total: usize, capacity: usize },
}

// ========== 便捷构造函数 ==========

impl StoreError {
    /// 创建班级不存在错误
    pub fn class_not_found(name: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind: "班级",
            name: name.into(),
        }
    }

    /// 创建考场不存在错误
    pub fn room_not_found(name: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind: "考场",
            name: name.into(),
        }
    }

    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建 JSON 错误
    pub fn json(path: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Json {
            path: path.into(),
            source,
        }
    }

    /// 是否为记录不存在
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_error_reports_both_counts() {
        let err = AllocationError::CapacityExceeded {
            class1: 40,
            class2: 30,
            capacity: 64,
        };
        let msg = err.to_string();
        assert!(msg.contains("70"));
        assert!(msg.contains("40"));
        assert!(msg.contains("30"));
        assert!(msg.contains("64"));
        assert_eq!(err.overflow(), Some(6));
    }

    #[test]
    fn test_missing_columns_lists_available() {
        let err = RosterError::MissingColumns {
            missing: vec!["course".to_string()],
            available: vec!["roll_no".to_string(), "name".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "缺少必需的列: course。现有列: roll_no, name"
        );
    }
}
