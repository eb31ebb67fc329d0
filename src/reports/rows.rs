use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAverage {
    pub student: String,
    pub avg_grade: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineStudentAverage {
    pub discipline: String,
    pub student: String,
    pub avg_grade: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAverage {
    pub discipline: String,
    pub group_id: i64,
    pub group: String,
    pub avg_grade: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAverage {
    pub avg_grade: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDiscipline {
    pub teacher: String,
    pub discipline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub group: String,
    pub student: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupGrade {
    pub student: String,
    pub group: String,
    pub discipline: String,
    pub grade: f64,
    pub date_of: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherAverage {
    pub teacher: String,
    pub discipline: String,
    pub avg_grade: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCourse {
    pub student: String,
    pub discipline: String,
    pub date_of: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentTeacherCourse {
    pub discipline: String,
    pub student: String,
    pub teacher: String,
    pub date_of: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentTeacherAverage {
    pub teacher: String,
    pub student: String,
    pub discipline: String,
    pub avg_grade: f64,
}

/// A grade given on the most recent session of a discipline for a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGrade {
    pub discipline: String,
    pub student: String,
    pub group: String,
    pub date_of: NaiveDate,
    pub grade: f64,
}
