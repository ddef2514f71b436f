use serde::{Deserialize, Serialize};

/// 考生
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// 学号（班级内唯一）
    pub roll_no: String,
    /// 课程
    pub course: String,
}

impl Student {
    pub fn new(roll_no: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            roll_no: roll_no.into(),
            course: course.into(),
        }
    }

    /// 是否与另一名考生同课程
    pub fn shares_course_with(&self, other: &Student) -> bool {
        self.course == other.course
    }
}

/// 班级名单
///
/// 顺序即上传顺序，配对时按此顺序遍历，因此必须是有序序列。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassRoster {
    students: Vec<Student>,
}

impl ClassRoster {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn into_students(self) -> Vec<Student> {
        self.students
    }
}

impl From<Vec<Student>> for ClassRoster {
    fn from(students: Vec<Student>) -> Self {
        Self::new(students)
    }
}

impl FromIterator<Student> for ClassRoster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ClassRoster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}
