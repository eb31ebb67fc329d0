#![allow(dead_code)]

use rusqlite::Connection;
use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tempfile::TempDir;

pub const SEED: &str = include_str!("../fixtures/school_seed.sql");

pub fn temp_workspace() -> TempDir {
    tempfile::Builder::new()
        .prefix("reportd-")
        .tempdir()
        .expect("create temp dir")
}

/// Writes the sample school into the workspace store through a separate,
/// writable connection.
pub fn seed_workspace(workspace: &Path) {
    let conn = Connection::open(reportd::db::db_path(workspace)).expect("open db");
    reportd::db::ensure_schema(&conn).expect("schema");
    conn.execute_batch(SEED).expect("seed");
}

pub struct Sidecar {
    pub child: Child,
    pub stdin: ChildStdin,
    pub reader: BufReader<ChildStdout>,
}

impl Drop for Sidecar {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn spawn_sidecar() -> Sidecar {
    let exe = env!("CARGO_BIN_EXE_reportd");
    let mut child = Command::new(exe)
        .env_remove("REPORTD_WORKSPACE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn reportd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    Sidecar {
        child,
        stdin,
        reader: BufReader::new(stdout),
    }
}

pub fn send_line(sidecar: &mut Sidecar, line: &str) -> serde_json::Value {
    writeln!(sidecar.stdin, "{}", line).expect("write request");
    sidecar.stdin.flush().expect("flush request");

    let mut resp = String::new();
    sidecar
        .reader
        .read_line(&mut resp)
        .expect("read response line");
    assert!(!resp.trim().is_empty(), "empty response for {}", line);
    serde_json::from_str(resp.trim()).expect("parse response json")
}

pub fn request(
    sidecar: &mut Sidecar,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    let value = send_line(sidecar, &payload.to_string());
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

pub fn request_ok(
    sidecar: &mut Sidecar,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(sidecar, id, method, params);
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or(serde_json::Value::Null)
}

pub fn error_code(resp: &serde_json::Value) -> Option<&str> {
    resp.get("error")
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
}

pub fn rows(result: &serde_json::Value) -> Vec<serde_json::Value> {
    result
        .get("rows")
        .and_then(|v| v.as_array())
        .cloned()
        .expect("rows array")
}

/// Sidecar with the seeded sample workspace already selected.
pub fn seeded_sidecar() -> (TempDir, Sidecar) {
    let workspace = temp_workspace();
    seed_workspace(workspace.path());
    let mut sidecar = spawn_sidecar();
    let _ = request_ok(
        &mut sidecar,
        "ws",
        "workspace.select",
        json!({ "path": workspace.path().to_string_lossy() }),
    );
    (workspace, sidecar)
}
