use serde::{Deserialize, Serialize};

use crate::models::room::{RoomShape, SEATS_PER_BENCH};

/// 长凳：最多坐两人的有序序列
///
/// 空凳、单人凳、双人凳统一用同一种表示，序列化为学号数组。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bench {
    occupants: Vec<String>,
}

impl Bench {
    pub fn new() -> Self {
        Self {
            occupants: Vec::with_capacity(SEATS_PER_BENCH),
        }
    }

    /// 在第一个空位上落座
    ///
    /// 长凳已满时返回 `false`，不做任何修改。
    pub fn seat(&mut self, roll_no: impl Into<String>) -> bool {
        if self.is_full() {
            return false;
        }
        self.occupants.push(roll_no.into());
        true
    }

    pub fn occupants(&self) -> &[String] {
        &self.occupants
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.occupants.len() >= SEATS_PER_BENCH
    }
}

/// 座位表：行（前→后）× 长凳（左→右）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatingGrid {
    rows: Vec<Vec<Bench>>,
}

impl SeatingGrid {
    /// 按考场形状创建全空座位表
    pub fn empty(shape: RoomShape) -> Self {
        Self {
            rows: (0..shape.rows)
                .map(|_| (0..shape.cols).map(|_| Bench::new()).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Bench>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 按行优先顺序遍历所有长凳
    pub fn benches(&self) -> impl Iterator<Item = &Bench> {
        self.rows.iter().flatten()
    }

    pub(crate) fn benches_mut(&mut self) -> impl Iterator<Item = &mut Bench> {
        self.rows.iter_mut().flatten()
    }

    /// 按行优先顺序遍历所有学号
    pub fn roll_numbers(&self) -> impl Iterator<Item = &str> {
        self.benches()
            .flat_map(|bench| bench.occupants().iter().map(String::as_str))
    }

    pub fn occupied_seats(&self) -> usize {
        self.benches().map(Bench::len).sum()
    }

    /// 至少坐了一人的长凳数
    pub fn benches_used(&self) -> usize {
        self.benches().filter(|bench| !bench.is_empty()).count()
    }

    /// 以 (行, 列) 取长凳
    pub fn bench(&self, row: usize, col: usize) -> Option<&Bench> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_closes_after_two_occupants() {
        let mut bench = Bench::new();
        assert!(bench.seat("A1"));
        assert!(bench.seat("B1"));
        assert!(bench.is_full());
        assert!(!bench.seat("C1"));
        assert_eq!(bench.occupants(), ["A1", "B1"]);
    }

    #[test]
    fn test_grid_serializes_as_nested_arrays() {
        let shape = RoomShape::new(1, 3).unwrap();
        let mut grid = SeatingGrid::empty(shape);
        {
            let mut benches = grid.benches_mut();
            let first = benches.next().unwrap();
            first.seat("A1");
            first.seat("B1");
            benches.next().unwrap().seat("B2");
        }

        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[[["A1","B1"],["B2"],[]]]"#);
        assert_eq!(grid.occupied_seats(), 3);
        assert_eq!(grid.benches_used(), 2);
    }
}
