//! 座位分配 - 业务能力层
//!
//! 轮转配对：两个班级各有一个游标，按行优先顺序逐张长凳落座。
//!
//! 1. 两班都有剩余考生时，每张长凳坐一对：班级1的考生坐第一个位置，班级2的考生坐第二个位置
//! 2. 两人同课程时向后查找替补：先扫描剩余人数较多的班级（人数相同时先扫描班级2），
//!    找不到再扫描另一个班级；取第一个课程不同的考生，其余考生保持原顺序
//! 3. 找不到替补时同课程考生照常同坐
//! 4. 一个班级用完后，另一个班级的考生每人独占一张长凳
//! 5. 两班都用完后，剩余长凳保持为空
//!
//! 这是贪心策略，不保证同课程同桌数最少。

use std::collections::VecDeque;

use tracing::debug;

use crate::error::AllocationError;
use crate::models::room::RoomShape;
use crate::models::seating::SeatingGrid;
use crate::models::student::{ClassRoster, Student};

/// 为两个班级分配座位
///
/// # 参数
/// - `class1`: 班级1名单（按上传顺序）
/// - `class2`: 班级2名单（按上传顺序）
/// - `shape`: 考场形状
///
/// # 返回
/// 返回完整的座位表，行列数与 `shape` 一致；校验失败时不落座任何考生
pub fn allocate(
    class1: &ClassRoster,
    class2: &ClassRoster,
    shape: RoomShape,
) -> Result<SeatingGrid, AllocationError> {
    check_capacity(class1, class2, shape)?;

    let mut first: VecDeque<&Student> = class1.iter().collect();
    let mut second: VecDeque<&Student> = class2.iter().collect();
    let mut grid = SeatingGrid::empty(shape);

    for bench in grid.benches_mut() {
        match (first.is_empty(), second.is_empty()) {
            (false, false) => {
                let (a, b) = take_pair(&mut first, &mut second);
                bench.seat(a.roll_no.as_str());
                bench.seat(b.roll_no.as_str());
            }
            (false, true) => {
                if let Some(student) = first.pop_front() {
                    debug!("单人落座 (班级1): {}", student.roll_no);
                    bench.seat(student.roll_no.as_str());
                }
            }
            (true, false) => {
                if let Some(student) = second.pop_front() {
                    debug!("单人落座 (班级2): {}", student.roll_no);
                    bench.seat(student.roll_no.as_str());
                }
            }
            (true, true) => break,
        }
    }

    Ok(grid)
}

/// 落座前的全部校验
///
/// 顺序：容量 → 形状 → 空名单 → 长凳数。
/// 非空名单遇到零容量考场时报告容量不足，而不是形状非法。
fn check_capacity(
    class1: &ClassRoster,
    class2: &ClassRoster,
    shape: RoomShape,
) -> Result<(), AllocationError> {
    let capacity = shape.capacity();
    if class1.len() + class2.len() > capacity {
        return Err(AllocationError::CapacityExceeded {
            class1: class1.len(),
            class2: class2.len(),
            capacity,
        });
    }

    shape.validate()?;

    if class1.is_empty() && class2.is_empty() {
        return Err(AllocationError::EmptyRoster);
    }

    // 较大班级的多余考生各占一张长凳
    let required = class1.len().max(class2.len());
    if required > shape.bench_count() {
        return Err(AllocationError::InsufficientBenches {
            required,
            available: shape.bench_count(),
        });
    }

    Ok(())
}

/// 取出一对考生，两个队列都必须非空
fn take_pair<'a>(
    first: &mut VecDeque<&'a Student>,
    second: &mut VecDeque<&'a Student>,
) -> (&'a Student, &'a Student) {
    let (a, b) = (first[0], second[0]);

    if a.shares_course_with(b) {
        let second_first = second.len() >= first.len();
        let substitute = if second_first {
            substitute_index(second, a)
                .map(|idx| (0, idx))
                .or_else(|| substitute_index(first, b).map(|idx| (idx, 0)))
        } else {
            substitute_index(first, b)
                .map(|idx| (idx, 0))
                .or_else(|| substitute_index(second, a).map(|idx| (0, idx)))
        };

        if let Some((i, j)) = substitute {
            // i、j 均由 substitute_index 在各自队列中找到，一定有效
            if let (Some(x), Some(y)) = (first.remove(i), second.remove(j)) {
                debug!(
                    "同课程 ({}) 冲突，改为配对 {} ({}) + {} ({})",
                    a.course, x.roll_no, x.course, y.roll_no, y.course
                );
                return (x, y);
            }
        }

        debug!("无可替补考生，同课程同桌: {} + {} ({})", a.roll_no, b.roll_no, a.course);
    }

    first.pop_front();
    second.pop_front();
    (a, b)
}

/// 从队首之后查找第一个与 `partner` 课程不同的考生
fn substitute_index(queue: &VecDeque<&Student>, partner: &Student) -> Option<usize> {
    queue
        .iter()
        .skip(1)
        .position(|candidate| !candidate.shares_course_with(partner))
        .map(|pos| pos + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn roster(prefix: &str, courses: &[&str]) -> ClassRoster {
        courses
            .iter()
            .enumerate()
            .map(|(i, course)| Student::new(format!("{}{}", prefix, i + 1), *course))
            .collect()
    }

    fn bench_rolls(grid: &SeatingGrid, row: usize, col: usize) -> Vec<&str> {
        grid.bench(row, col)
            .unwrap()
            .occupants()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_every_student_seated_exactly_once() {
        let class1 = roster("A", &["CS", "ME", "CS", "EE", "CS", "ME", "CS"]);
        let class2 = roster("B", &["CS", "CS", "ME", "EE", "CS"]);
        let grid = allocate(&class1, &class2, RoomShape::new(3, 4).unwrap()).unwrap();

        let seated: Vec<&str> = grid.roll_numbers().collect();
        let unique: HashSet<&str> = seated.iter().copied().collect();
        assert_eq!(seated.len(), unique.len());

        let expected: HashSet<&str> = class1
            .iter()
            .chain(class2.iter())
            .map(|s| s.roll_no.as_str())
            .collect();
        assert_eq!(unique, expected);
    }

    #[test]
    fn test_grid_keeps_requested_shape() {
        let class1 = roster("A", &["CS"]);
        let class2 = roster("B", &["ME"]);
        let grid = allocate(&class1, &class2, RoomShape::new(5, 3).unwrap()).unwrap();

        assert_eq!(grid.row_count(), 5);
        assert!(grid.rows().iter().all(|row| row.len() == 3));
        assert_eq!(grid.benches().count(), 15);
    }

    #[test]
    fn test_pairs_come_from_different_classes() {
        let class1 = roster("A", &["CS", "ME", "EE"]);
        let class2 = roster("B", &["ME", "EE", "CS"]);
        let grid = allocate(&class1, &class2, RoomShape::new(1, 3).unwrap()).unwrap();

        for bench in grid.benches() {
            let occupants = bench.occupants();
            assert_eq!(occupants.len(), 2);
            assert!(occupants[0].starts_with('A'));
            assert!(occupants[1].starts_with('B'));
        }
    }

    #[test]
    fn test_same_course_conflict_uses_class1_lookahead() {
        // 班级2全是 CS，只能在班级1中找到 A2 (ME) 作为替补
        let class1 = ClassRoster::new(vec![Student::new("A1", "CS"), Student::new("A2", "ME")]);
        let class2 = ClassRoster::new(vec![Student::new("B1", "CS"), Student::new("B2", "CS")]);
        let grid = allocate(&class1, &class2, RoomShape::new(1, 2).unwrap()).unwrap();

        assert_eq!(bench_rolls(&grid, 0, 0), ["A2", "B1"]);
        // A1 没有被跳过丢弃，下一张长凳仍然优先安排
        assert_eq!(bench_rolls(&grid, 0, 1), ["A1", "B2"]);
    }

    #[test]
    fn test_same_course_conflict_prefers_larger_class() {
        let class1 = roster("A", &["CS", "ME"]);
        let class2 = roster("B", &["CS", "CS", "EE"]);
        let grid = allocate(&class1, &class2, RoomShape::new(2, 2).unwrap()).unwrap();

        // 班级2剩余较多，先在班级2中找到 B3 (EE)
        assert_eq!(bench_rolls(&grid, 0, 0), ["A1", "B3"]);
        assert_eq!(bench_rolls(&grid, 0, 1), ["A2", "B1"]);
        assert_eq!(bench_rolls(&grid, 1, 0), ["B2"]);
        assert!(grid.bench(1, 1).unwrap().is_empty());
    }

    #[test]
    fn test_larger_class1_is_scanned_first() {
        let class1 = roster("A", &["CS", "ME", "EE"]);
        let class2 = roster("B", &["CS", "ME"]);
        let grid = allocate(&class1, &class2, RoomShape::new(1, 3).unwrap()).unwrap();

        // 班级1剩余较多，A2 (ME) 替补与 B1 同桌，A1 顺延
        assert_eq!(bench_rolls(&grid, 0, 0), ["A2", "B1"]);
        assert_eq!(bench_rolls(&grid, 0, 1), ["A1", "B2"]);
        assert_eq!(bench_rolls(&grid, 0, 2), ["A3"]);
    }

    #[test]
    fn test_larger_class1_falls_back_to_class2() {
        let class1 = roster("A", &["CS", "CS", "CS"]);
        let class2 = roster("B", &["CS", "ME"]);
        let grid = allocate(&class1, &class2, RoomShape::new(1, 3).unwrap()).unwrap();

        // 班级1中没有其他课程，转而在班级2中找到 B2 (ME)
        assert_eq!(bench_rolls(&grid, 0, 0), ["A1", "B2"]);
        // 两边都无替补，只能同课程同桌
        assert_eq!(bench_rolls(&grid, 0, 1), ["A2", "B1"]);
        assert_eq!(bench_rolls(&grid, 0, 2), ["A3"]);
    }

    #[test]
    fn test_tie_scans_class2_first() {
        let class1 = roster("A", &["CS", "ME"]);
        let class2 = roster("B", &["CS", "EE"]);
        let grid = allocate(&class1, &class2, RoomShape::new(1, 2).unwrap()).unwrap();

        assert_eq!(bench_rolls(&grid, 0, 0), ["A1", "B2"]);
        assert_eq!(bench_rolls(&grid, 0, 1), ["A2", "B1"]);
    }

    #[test]
    fn test_lookahead_takes_earliest_alternative() {
        let class1 = roster("A", &["CS"]);
        let class2 = roster("B", &["CS", "CS", "ME", "EE"]);
        let grid = allocate(&class1, &class2, RoomShape::new(1, 4).unwrap()).unwrap();

        assert_eq!(bench_rolls(&grid, 0, 0), ["A1", "B3"]);
        // 其余考生保持原顺序单人落座
        assert_eq!(bench_rolls(&grid, 0, 1), ["B1"]);
        assert_eq!(bench_rolls(&grid, 0, 2), ["B2"]);
        assert_eq!(bench_rolls(&grid, 0, 3), ["B4"]);
    }

    #[test]
    fn test_unavoidable_conflict_still_pairs() {
        let class1 = roster("A", &["CS", "CS"]);
        let class2 = roster("B", &["CS", "CS"]);
        let grid = allocate(&class1, &class2, RoomShape::new(1, 2).unwrap()).unwrap();

        assert_eq!(bench_rolls(&grid, 0, 0), ["A1", "B1"]);
        assert_eq!(bench_rolls(&grid, 0, 1), ["A2", "B2"]);
    }

    #[test]
    fn test_unequal_sizes_leave_single_occupant() {
        let class1 = roster("A", &["CS", "CS", "CS", "CS", "CS"]);
        let class2 = roster("B", &["ME", "ME", "ME", "ME", "ME", "ME"]);
        let grid = allocate(&class1, &class2, RoomShape::new(4, 8).unwrap()).unwrap();

        let benches: Vec<_> = grid.benches().collect();
        for bench in &benches[..5] {
            assert_eq!(bench.len(), 2);
        }
        assert_eq!(benches[5].occupants(), ["B6"]);
        assert!(benches[6..].iter().all(|bench| bench.is_empty()));

        let singles = benches.iter().filter(|bench| bench.len() == 1).count();
        assert_eq!(singles, 1);
    }

    #[test]
    fn test_class1_leftovers_sit_alone() {
        let class1 = roster("A", &["CS", "CS", "CS"]);
        let grid = allocate(&class1, &ClassRoster::default(), RoomShape::new(1, 3).unwrap())
            .unwrap();

        assert_eq!(bench_rolls(&grid, 0, 0), ["A1"]);
        assert_eq!(bench_rolls(&grid, 0, 1), ["A2"]);
        assert_eq!(bench_rolls(&grid, 0, 2), ["A3"]);
    }

    #[test]
    fn test_trailing_benches_stay_empty() {
        let class1 = roster("A", &["CS", "ME"]);
        let class2 = roster("B", &["EE", "EE", "ME"]);
        let shape = RoomShape::new(3, 3).unwrap();
        let grid = allocate(&class1, &class2, shape).unwrap();

        assert_eq!(grid.benches_used(), 3);
        let empty = grid.benches().filter(|bench| bench.is_empty()).count();
        assert_eq!(empty, shape.bench_count() - grid.benches_used());
        assert!(grid.benches().skip(3).all(|bench| bench.is_empty()));
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let class1 = roster("A", &["CS", "ME", "CS", "CS", "EE"]);
        let class2 = roster("B", &["CS", "CS", "ME", "CS"]);
        let shape = RoomShape::new(2, 4).unwrap();

        let first = allocate(&class1, &class2, shape).unwrap();
        let second = allocate(&class1, &class2, shape).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_capacity_exceeded() {
        let class1 = roster("A", &["CS", "CS", "CS"]);
        let class2 = roster("B", &["ME", "ME"]);
        let err = allocate(&class1, &class2, RoomShape::new(1, 2).unwrap()).unwrap_err();

        assert_eq!(
            err,
            AllocationError::CapacityExceeded {
                class1: 3,
                class2: 2,
                capacity: 4,
            }
        );
        assert_eq!(err.overflow(), Some(1));
    }

    #[test]
    fn test_zero_capacity_room_with_students() {
        let class1 = roster("A", &["CS"]);
        let shape = RoomShape { rows: 0, cols: 4 };
        let err = allocate(&class1, &ClassRoster::default(), shape).unwrap_err();

        assert!(matches!(
            err,
            AllocationError::CapacityExceeded { capacity: 0, .. }
        ));
    }

    #[test]
    fn test_invalid_shape_without_students() {
        let shape = RoomShape { rows: 2, cols: 0 };
        let err = allocate(&ClassRoster::default(), &ClassRoster::default(), shape).unwrap_err();

        assert_eq!(err, AllocationError::InvalidShape { rows: 2, cols: 0 });
    }

    #[test]
    fn test_both_rosters_empty() {
        let err = allocate(
            &ClassRoster::default(),
            &ClassRoster::default(),
            RoomShape::new(2, 2).unwrap(),
        )
        .unwrap_err();

        assert_eq!(err, AllocationError::EmptyRoster);
    }

    #[test]
    fn test_single_class_needs_one_bench_per_student() {
        // 4 人未超过 2 张长凳的座位数，但单人落座需要 4 张长凳
        let class2 = roster("B", &["ME", "ME", "ME", "ME"]);
        let err = allocate(&ClassRoster::default(), &class2, RoomShape::new(1, 2).unwrap())
            .unwrap_err();

        assert_eq!(
            err,
            AllocationError::InsufficientBenches {
                required: 4,
                available: 2,
            }
        );
    }
}
