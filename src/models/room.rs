use serde::{Deserialize, Serialize};

use crate::error::AllocationError;

/// 每张长凳的座位数（固定，不随考场变化）
pub const SEATS_PER_BENCH: usize = 2;

/// 单个考场允许的最大长凳数
pub const MAX_BENCHES: usize = 100_000;

/// 考场形状：行数 × 每行长凳数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomShape {
    pub rows: usize,
    pub cols: usize,
}

impl RoomShape {
    /// 创建并校验考场形状
    ///
    /// 行数或列数为 0 时返回 [`AllocationError::InvalidShape`]；
    /// 长凳数超过 [`MAX_BENCHES`] 时返回 [`AllocationError::ShapeTooLarge`]。
    pub fn new(rows: usize, cols: usize) -> Result<Self, AllocationError> {
        let shape = Self { rows, cols };
        shape.validate()?;
        Ok(shape)
    }

    pub fn validate(&self) -> Result<(), AllocationError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(AllocationError::InvalidShape {
                rows: self.rows,
                cols: self.cols,
            });
        }
        match self.rows.checked_mul(self.cols) {
            Some(benches) if benches <= MAX_BENCHES => Ok(()),
            _ => Err(AllocationError::ShapeTooLarge {
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// 长凳总数（溢出时取 `usize::MAX`）
    pub fn bench_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// 座位总数（溢出时取 `usize::MAX`）
    pub fn capacity(&self) -> usize {
        self.bench_count().saturating_mul(SEATS_PER_BENCH)
    }
}

/// 考场配置（持久化及报告中回显的数值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfiguration {
    pub rows: usize,
    pub cols: usize,
    pub total_capacity: usize,
}

impl RoomConfiguration {
    pub fn shape(&self) -> RoomShape {
        RoomShape {
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl From<RoomShape> for RoomConfiguration {
    fn from(shape: RoomShape) -> Self {
        Self {
            rows: shape.rows,
            cols: shape.cols,
            total_capacity: shape.capacity(),
        }
    }
}

/// 考场布局描述
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomLayout {
    pub total_rows: usize,
    pub total_columns: usize,
    pub seats_per_bench: usize,
}

impl From<RoomShape> for RoomLayout {
    fn from(shape: RoomShape) -> Self {
        Self {
            total_rows: shape.rows,
            total_columns: shape.cols,
            seats_per_bench: SEATS_PER_BENCH,
        }
    }
}
