use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::reports::{self, ReportQueryService, CATALOG};
use rusqlite::Connection;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

fn required_id(req: &Request, key: &str) -> Result<i64, serde_json::Value> {
    match req.params.get(key) {
        None | Some(serde_json::Value::Null) => Err(err(
            &req.id,
            "bad_params",
            format!("missing {}", key),
            None,
        )),
        Some(v) => v.as_i64().ok_or_else(|| {
            err(
                &req.id,
                "bad_params",
                format!("{} must be an integer", key),
                Some(json!({ key: v })),
            )
        }),
    }
}

fn required_ids<const N: usize>(
    req: &Request,
    keys: [&str; N],
) -> Result<[i64; N], serde_json::Value> {
    let mut ids = [0_i64; N];
    for (slot, key) in ids.iter_mut().zip(keys) {
        *slot = required_id(req, key)?;
    }
    Ok(ids)
}

fn db_conn<'a>(state: &'a AppState, req: &Request) -> Result<&'a Connection, serde_json::Value> {
    state
        .db
        .as_ref()
        .ok_or_else(|| err(&req.id, "no_workspace", "select a workspace first", None))
}

fn rows_response<T: Serialize>(req: &Request, res: reports::Result<Vec<T>>) -> serde_json::Value {
    match res {
        Ok(rows) => {
            debug!(method = %req.method, rows = rows.len(), "report served");
            ok(&req.id, json!({ "rows": rows }))
        }
        Err(e) => {
            warn!(method = %req.method, error = %e, "report failed");
            err(&req.id, "db_query_failed", e.to_string(), None)
        }
    }
}

fn handle_reports_list(req: &Request) -> serde_json::Value {
    let reports: Vec<_> = CATALOG
        .iter()
        .map(|spec| {
            json!({
                "method": spec.method,
                "params": spec.params,
                "title": spec.title,
            })
        })
        .collect();
    ok(&req.id, json!({ "reports": reports }))
}

fn handle_report(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let svc = ReportQueryService::new(conn);

    match req.method.as_str() {
        "reports.topStudents" => rows_response(req, svc.top_students()),
        "reports.bestStudentInDiscipline" => {
            let [discipline_id] = match required_ids(req, ["disciplineId"]) {
                Ok(v) => v,
                Err(e) => return e,
            };
            rows_response(req, svc.best_student_in_discipline(discipline_id))
        }
        "reports.groupAveragesForDiscipline" => {
            let [discipline_id] = match required_ids(req, ["disciplineId"]) {
                Ok(v) => v,
                Err(e) => return e,
            };
            rows_response(req, svc.group_averages_for_discipline(discipline_id))
        }
        "reports.overallAverage" => rows_response(req, svc.overall_average()),
        "reports.teacherDisciplines" => rows_response(req, svc.teacher_disciplines()),
        "reports.groupStudents" => {
            let [group_id] = match required_ids(req, ["groupId"]) {
                Ok(v) => v,
                Err(e) => return e,
            };
            rows_response(req, svc.group_students(group_id))
        }
        "reports.groupDisciplineGrades" => {
            let [group_id, discipline_id] = match required_ids(req, ["groupId", "disciplineId"]) {
                Ok(v) => v,
                Err(e) => return e,
            };
            rows_response(req, svc.group_discipline_grades(group_id, discipline_id))
        }
        "reports.teacherAverages" => {
            let [teacher_id] = match required_ids(req, ["teacherId"]) {
                Ok(v) => v,
                Err(e) => return e,
            };
            rows_response(req, svc.teacher_averages(teacher_id))
        }
        "reports.studentCourses" => {
            let [student_id] = match required_ids(req, ["studentId"]) {
                Ok(v) => v,
                Err(e) => return e,
            };
            rows_response(req, svc.student_courses(student_id))
        }
        "reports.studentTeacherCourses" => {
            let [student_id, teacher_id] = match required_ids(req, ["studentId", "teacherId"]) {
                Ok(v) => v,
                Err(e) => return e,
            };
            rows_response(req, svc.student_teacher_courses(student_id, teacher_id))
        }
        "reports.studentTeacherAverages" => {
            let [student_id, teacher_id] = match required_ids(req, ["studentId", "teacherId"]) {
                Ok(v) => v,
                Err(e) => return e,
            };
            rows_response(req, svc.student_teacher_averages(student_id, teacher_id))
        }
        "reports.latestSessionGrades" => {
            let [discipline_id, group_id] = match required_ids(req, ["disciplineId", "groupId"]) {
                Ok(v) => v,
                Err(e) => return e,
            };
            rows_response(req, svc.latest_session_grades(discipline_id, group_id))
        }
        other => err(
            &req.id,
            "not_implemented",
            format!("unknown method: {}", other),
            None,
        ),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "reports.list" => Some(handle_reports_list(req)),
        m if CATALOG.iter().any(|spec| spec.method == m) => Some(handle_report(state, req)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(method: &str, params: serde_json::Value) -> Request {
        Request {
            id: "t".into(),
            method: method.into(),
            params,
        }
    }

    fn error_code(resp: &serde_json::Value) -> Option<&str> {
        resp.get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
    }

    #[test]
    fn required_ids_reject_missing_and_non_integer_values() {
        let r = req("reports.groupStudents", json!({}));
        let e = required_ids(&r, ["groupId"]).expect_err("missing");
        assert_eq!(error_code(&e), Some("bad_params"));

        let r = req("reports.groupStudents", json!({ "groupId": "2" }));
        let e = required_ids(&r, ["groupId"]).expect_err("string");
        assert_eq!(error_code(&e), Some("bad_params"));

        let r = req("reports.groupStudents", json!({ "groupId": 2.5 }));
        assert!(required_ids(&r, ["groupId"]).is_err());

        let r = req(
            "reports.latestSessionGrades",
            json!({ "disciplineId": 4, "groupId": 2 }),
        );
        assert_eq!(
            required_ids(&r, ["disciplineId", "groupId"]).expect("ids"),
            [4, 2]
        );
    }

    #[test]
    fn reports_need_a_workspace() {
        let mut state = AppState::default();
        let resp = try_handle(&mut state, &req("reports.topStudents", json!({})))
            .expect("handled");
        assert_eq!(error_code(&resp), Some("no_workspace"));
    }

    #[test]
    fn list_is_served_without_a_workspace() {
        let mut state = AppState::default();
        let resp = try_handle(&mut state, &req("reports.list", json!({}))).expect("handled");
        let reports = resp["result"]["reports"].as_array().expect("reports");
        assert_eq!(reports.len(), 12);
        assert_eq!(reports[11]["params"], json!(["disciplineId", "groupId"]));
    }

    #[test]
    fn unknown_report_methods_fall_through() {
        let mut state = AppState::default();
        assert!(try_handle(&mut state, &req("reports.nope", json!({}))).is_none());
    }
}
