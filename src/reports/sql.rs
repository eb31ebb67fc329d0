//! One statement per report. Averages are rounded by the store
//! (`ROUND(AVG(..), 2)`), dates are ISO `YYYY-MM-DD` text so `MAX` and
//! `ORDER BY` on `date_of` are chronological.

pub const TOP_STUDENTS: &str = "SELECT s.fullname, ROUND(AVG(g.grade), 2) AS avg_grade
     FROM grades g
     JOIN students s ON s.id = g.student_id
     GROUP BY s.id
     ORDER BY avg_grade DESC, s.id
     LIMIT 5";

pub const BEST_STUDENT_IN_DISCIPLINE: &str =
    "SELECT d.name, s.fullname, ROUND(AVG(g.grade), 2) AS avg_grade
     FROM grades g
     JOIN students s ON s.id = g.student_id
     JOIN disciplines d ON d.id = g.discipline_id
     WHERE d.id = ?1
     GROUP BY s.id, d.name
     ORDER BY avg_grade DESC, s.id
     LIMIT 1";

pub const GROUP_AVERAGES_FOR_DISCIPLINE: &str =
    "SELECT d.name, sg.id, sg.name, ROUND(AVG(g.grade), 2) AS avg_grade
     FROM grades g
     JOIN students s ON s.id = g.student_id
     JOIN groups sg ON sg.id = s.group_id
     JOIN disciplines d ON d.id = g.discipline_id
     WHERE d.id = ?1
     GROUP BY sg.id, d.name
     ORDER BY sg.id";

pub const OVERALL_AVERAGE: &str = "SELECT ROUND(AVG(g.grade), 2) AS avg_grade FROM grades g";

pub const TEACHER_DISCIPLINES: &str = "SELECT t.fullname, d.name
     FROM disciplines d
     JOIN teachers t ON t.id = d.teacher_id
     ORDER BY t.fullname, t.id, d.name";

pub const GROUP_STUDENTS: &str = "SELECT sg.name, s.fullname
     FROM students s
     JOIN groups sg ON sg.id = s.group_id
     WHERE sg.id = ?1
     ORDER BY s.fullname, s.id";

pub const GROUP_DISCIPLINE_GRADES: &str =
    "SELECT s.fullname, sg.name, d.name, g.grade, g.date_of
     FROM grades g
     JOIN students s ON s.id = g.student_id
     JOIN disciplines d ON d.id = g.discipline_id
     JOIN groups sg ON sg.id = s.group_id
     WHERE sg.id = ?1 AND d.id = ?2
     ORDER BY s.fullname, s.id, g.date_of, g.id";

pub const TEACHER_AVERAGES: &str = "SELECT t.fullname, d.name, ROUND(AVG(g.grade), 2) AS avg_grade
     FROM grades g
     JOIN disciplines d ON d.id = g.discipline_id
     JOIN teachers t ON t.id = d.teacher_id
     WHERE t.id = ?1
     GROUP BY d.id, t.fullname
     ORDER BY d.name, d.id";

pub const STUDENT_COURSES: &str = "SELECT s.fullname, d.name, g.date_of
     FROM grades g
     JOIN students s ON s.id = g.student_id
     JOIN disciplines d ON d.id = g.discipline_id
     WHERE s.id = ?1
     ORDER BY d.name, g.date_of, g.id";

pub const STUDENT_TEACHER_COURSES: &str = "SELECT d.name, s.fullname, t.fullname, g.date_of
     FROM grades g
     JOIN students s ON s.id = g.student_id
     JOIN disciplines d ON d.id = g.discipline_id
     JOIN teachers t ON t.id = d.teacher_id
     WHERE s.id = ?1 AND t.id = ?2
     ORDER BY d.name, g.date_of, g.id";

pub const STUDENT_TEACHER_AVERAGES: &str =
    "SELECT t.fullname, s.fullname, d.name, ROUND(AVG(g.grade), 2) AS avg_grade
     FROM grades g
     JOIN students s ON s.id = g.student_id
     JOIN disciplines d ON d.id = g.discipline_id
     JOIN teachers t ON t.id = d.teacher_id
     WHERE s.id = ?1 AND t.id = ?2
     GROUP BY d.id, t.fullname, s.fullname
     ORDER BY d.name, d.id";

// The latest date is looked up for the exact discipline + group pair, inside
// the same statement, so both halves read one snapshot.
pub const LATEST_SESSION_GRADES: &str =
    "SELECT d.name, s.fullname, sg.name, g.date_of, g.grade
     FROM grades g
     JOIN students s ON s.id = g.student_id
     JOIN disciplines d ON d.id = g.discipline_id
     JOIN groups sg ON sg.id = s.group_id
     WHERE d.id = ?1
       AND sg.id = ?2
       AND g.date_of = (
         SELECT MAX(g2.date_of)
         FROM grades g2
         JOIN students s2 ON s2.id = g2.student_id
         WHERE g2.discipline_id = ?1 AND s2.group_id = ?2
       )
     ORDER BY g.date_of DESC, s.fullname, g.id";
