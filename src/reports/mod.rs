//! Read-only reporting queries over the school store.
//!
//! Every report is a single SQL statement evaluated by SQLite. A filter that
//! matches nothing yields an empty `Vec`, never an error; the only failures
//! are the store's own, passed through as [`ReportError::Query`].

pub mod rows;
mod sql;

use rusqlite::{Connection, Params, Row};
use thiserror::Error;
use tracing::debug;

pub use rows::{
    DisciplineStudentAverage, GroupAverage, GroupGrade, GroupMember, OverallAverage,
    SessionGrade, StudentAverage, StudentCourse, StudentTeacherAverage, StudentTeacherCourse,
    TeacherAverage, TeacherDiscipline,
};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSpec {
    pub method: &'static str,
    pub params: &'static [&'static str],
    pub title: &'static str,
    pub sql: &'static str,
}

pub const CATALOG: [ReportSpec; 12] = [
    ReportSpec {
        method: "reports.topStudents",
        params: &[],
        title: "Top 5 students by average grade across all disciplines",
        sql: sql::TOP_STUDENTS,
    },
    ReportSpec {
        method: "reports.bestStudentInDiscipline",
        params: &["disciplineId"],
        title: "Student with the highest average grade in a discipline",
        sql: sql::BEST_STUDENT_IN_DISCIPLINE,
    },
    ReportSpec {
        method: "reports.groupAveragesForDiscipline",
        params: &["disciplineId"],
        title: "Average grade per group in a discipline",
        sql: sql::GROUP_AVERAGES_FOR_DISCIPLINE,
    },
    ReportSpec {
        method: "reports.overallAverage",
        params: &[],
        title: "Average grade over all grades",
        sql: sql::OVERALL_AVERAGE,
    },
    ReportSpec {
        method: "reports.teacherDisciplines",
        params: &[],
        title: "Disciplines taught by each teacher",
        sql: sql::TEACHER_DISCIPLINES,
    },
    ReportSpec {
        method: "reports.groupStudents",
        params: &["groupId"],
        title: "Students in a group",
        sql: sql::GROUP_STUDENTS,
    },
    ReportSpec {
        method: "reports.groupDisciplineGrades",
        params: &["groupId", "disciplineId"],
        title: "Grades of a group's students in a discipline",
        sql: sql::GROUP_DISCIPLINE_GRADES,
    },
    ReportSpec {
        method: "reports.teacherAverages",
        params: &["teacherId"],
        title: "Average grade a teacher gives per discipline",
        sql: sql::TEACHER_AVERAGES,
    },
    ReportSpec {
        method: "reports.studentCourses",
        params: &["studentId"],
        title: "Disciplines a student attends",
        sql: sql::STUDENT_COURSES,
    },
    ReportSpec {
        method: "reports.studentTeacherCourses",
        params: &["studentId", "teacherId"],
        title: "Disciplines a teacher reads to a student",
        sql: sql::STUDENT_TEACHER_COURSES,
    },
    ReportSpec {
        method: "reports.studentTeacherAverages",
        params: &["studentId", "teacherId"],
        title: "Average grade a teacher gives a student per discipline",
        sql: sql::STUDENT_TEACHER_AVERAGES,
    },
    ReportSpec {
        method: "reports.latestSessionGrades",
        params: &["disciplineId", "groupId"],
        title: "Grades of a group in a discipline on the most recent session",
        sql: sql::LATEST_SESSION_GRADES,
    },
];

pub struct ReportQueryService<'a> {
    conn: &'a Connection,
}

impl<'a> ReportQueryService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn collect<T, P, F>(&self, name: &str, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt
            .query_map(params, map)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(report = name, rows = rows.len(), "report evaluated");
        Ok(rows)
    }

    /// At most five students, highest average first.
    pub fn top_students(&self) -> Result<Vec<StudentAverage>> {
        self.collect("top_students", sql::TOP_STUDENTS, [], |r| {
            Ok(StudentAverage {
                student: r.get(0)?,
                avg_grade: r.get(1)?,
            })
        })
    }

    /// Zero or one row: the best average in the discipline.
    pub fn best_student_in_discipline(
        &self,
        discipline_id: i64,
    ) -> Result<Vec<DisciplineStudentAverage>> {
        self.collect(
            "best_student_in_discipline",
            sql::BEST_STUDENT_IN_DISCIPLINE,
            [discipline_id],
            |r| {
                Ok(DisciplineStudentAverage {
                    discipline: r.get(0)?,
                    student: r.get(1)?,
                    avg_grade: r.get(2)?,
                })
            },
        )
    }

    /// One row per group with grades in the discipline, by ascending group id.
    pub fn group_averages_for_discipline(&self, discipline_id: i64) -> Result<Vec<GroupAverage>> {
        self.collect(
            "group_averages_for_discipline",
            sql::GROUP_AVERAGES_FOR_DISCIPLINE,
            [discipline_id],
            |r| {
                Ok(GroupAverage {
                    discipline: r.get(0)?,
                    group_id: r.get(1)?,
                    group: r.get(2)?,
                    avg_grade: r.get(3)?,
                })
            },
        )
    }

    /// A single row, or none when no grade exists at all.
    pub fn overall_average(&self) -> Result<Vec<OverallAverage>> {
        let mut stmt = self.conn.prepare_cached(sql::OVERALL_AVERAGE)?;
        let avg: Option<f64> = stmt.query_row([], |r| r.get(0))?;
        debug!(report = "overall_average", present = avg.is_some(), "report evaluated");
        Ok(avg
            .map(|avg_grade| OverallAverage { avg_grade })
            .into_iter()
            .collect())
    }

    pub fn teacher_disciplines(&self) -> Result<Vec<TeacherDiscipline>> {
        self.collect("teacher_disciplines", sql::TEACHER_DISCIPLINES, [], |r| {
            Ok(TeacherDiscipline {
                teacher: r.get(0)?,
                discipline: r.get(1)?,
            })
        })
    }

    pub fn group_students(&self, group_id: i64) -> Result<Vec<GroupMember>> {
        self.collect("group_students", sql::GROUP_STUDENTS, [group_id], |r| {
            Ok(GroupMember {
                group: r.get(0)?,
                student: r.get(1)?,
            })
        })
    }

    pub fn group_discipline_grades(
        &self,
        group_id: i64,
        discipline_id: i64,
    ) -> Result<Vec<GroupGrade>> {
        self.collect(
            "group_discipline_grades",
            sql::GROUP_DISCIPLINE_GRADES,
            [group_id, discipline_id],
            |r| {
                Ok(GroupGrade {
                    student: r.get(0)?,
                    group: r.get(1)?,
                    discipline: r.get(2)?,
                    grade: r.get(3)?,
                    date_of: r.get(4)?,
                })
            },
        )
    }

    pub fn teacher_averages(&self, teacher_id: i64) -> Result<Vec<TeacherAverage>> {
        self.collect(
            "teacher_averages",
            sql::TEACHER_AVERAGES,
            [teacher_id],
            |r| {
                Ok(TeacherAverage {
                    teacher: r.get(0)?,
                    discipline: r.get(1)?,
                    avg_grade: r.get(2)?,
                })
            },
        )
    }

    /// One row per grade the student received, so a discipline repeats once
    /// per graded session.
    pub fn student_courses(&self, student_id: i64) -> Result<Vec<StudentCourse>> {
        self.collect("student_courses", sql::STUDENT_COURSES, [student_id], |r| {
            Ok(StudentCourse {
                student: r.get(0)?,
                discipline: r.get(1)?,
                date_of: r.get(2)?,
            })
        })
    }

    pub fn student_teacher_courses(
        &self,
        student_id: i64,
        teacher_id: i64,
    ) -> Result<Vec<StudentTeacherCourse>> {
        self.collect(
            "student_teacher_courses",
            sql::STUDENT_TEACHER_COURSES,
            [student_id, teacher_id],
            |r| {
                Ok(StudentTeacherCourse {
                    discipline: r.get(0)?,
                    student: r.get(1)?,
                    teacher: r.get(2)?,
                    date_of: r.get(3)?,
                })
            },
        )
    }

    pub fn student_teacher_averages(
        &self,
        student_id: i64,
        teacher_id: i64,
    ) -> Result<Vec<StudentTeacherAverage>> {
        self.collect(
            "student_teacher_averages",
            sql::STUDENT_TEACHER_AVERAGES,
            [student_id, teacher_id],
            |r| {
                Ok(StudentTeacherAverage {
                    teacher: r.get(0)?,
                    student: r.get(1)?,
                    discipline: r.get(2)?,
                    avg_grade: r.get(3)?,
                })
            },
        )
    }

    /// Grades of the group in the discipline dated on the latest `date_of`
    /// recorded for that exact discipline + group pair.
    pub fn latest_session_grades(
        &self,
        discipline_id: i64,
        group_id: i64,
    ) -> Result<Vec<SessionGrade>> {
        self.collect(
            "latest_session_grades",
            sql::LATEST_SESSION_GRADES,
            [discipline_id, group_id],
            |r| {
                Ok(SessionGrade {
                    discipline: r.get(0)?,
                    student: r.get(1)?,
                    group: r.get(2)?,
                    date_of: r.get(3)?,
                    grade: r.get(4)?,
                })
            },
        )
    }
}
