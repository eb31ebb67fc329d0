use crate::cli::DemoArgs;
use crate::reports::{self, ReportQueryService};
use rusqlite::Connection;
use serde::Serialize;
use std::io::Write;

fn section<T: Serialize, W: Write>(
    out: &mut W,
    title: &str,
    rows: reports::Result<Vec<T>>,
) -> anyhow::Result<()> {
    let rows = rows?;
    writeln!(out, "== {} ({} rows)", title, rows.len())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    Ok(())
}

/// Runs every report once with the sample identifiers and renders the rows.
pub fn run<W: Write>(conn: &Connection, args: &DemoArgs, out: &mut W) -> anyhow::Result<()> {
    let svc = ReportQueryService::new(conn);

    section(out, "top students", svc.top_students())?;
    section(
        out,
        &format!("best student, discipline {}", args.best_discipline),
        svc.best_student_in_discipline(args.best_discipline),
    )?;
    section(
        out,
        &format!("group averages, discipline {}", args.averages_discipline),
        svc.group_averages_for_discipline(args.averages_discipline),
    )?;
    section(out, "overall average", svc.overall_average())?;
    section(out, "teacher disciplines", svc.teacher_disciplines())?;
    section(
        out,
        &format!("students, group {}", args.group),
        svc.group_students(args.group),
    )?;
    section(
        out,
        &format!(
            "grades, group {} discipline {}",
            args.grades_group, args.grades_discipline
        ),
        svc.group_discipline_grades(args.grades_group, args.grades_discipline),
    )?;
    section(
        out,
        &format!("teacher {} averages", args.teacher),
        svc.teacher_averages(args.teacher),
    )?;
    section(
        out,
        &format!("courses, student {}", args.courses_student),
        svc.student_courses(args.courses_student),
    )?;
    section(
        out,
        &format!("courses, student {} teacher {}", args.student, args.teacher),
        svc.student_teacher_courses(args.student, args.teacher),
    )?;
    section(
        out,
        &format!("averages, student {} teacher {}", args.student, args.teacher),
        svc.student_teacher_averages(args.student, args.teacher),
    )?;
    section(
        out,
        &format!(
            "latest session, discipline {} group {}",
            args.latest_discipline, args.latest_group
        ),
        svc.latest_session_grades(args.latest_discipline, args.latest_group),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn demo_renders_all_twelve_sections() {
        let conn = Connection::open_in_memory().expect("open");
        db::ensure_schema(&conn).expect("schema");
        conn.execute_batch(include_str!("../tests/fixtures/school_seed.sql"))
            .expect("seed");

        let mut out = Vec::new();
        run(&conn, &DemoArgs::default(), &mut out).expect("demo");
        let text = String::from_utf8(out).expect("utf8");

        assert_eq!(text.lines().filter(|l| l.starts_with("== ")).count(), 12);
        assert!(text.contains("== top students (5 rows)"));
        assert!(text.contains("== latest session, discipline 4 group 2 (2 rows)"));
        assert!(text.contains("\"dateOf\": \"2023-05-10\""));
        // The seed has no discipline 6, so that section is empty, not an error.
        assert!(text.contains("== best student, discipline 6 (0 rows)"));
    }
}
