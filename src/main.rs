use clap::Parser;
use reportd::cli::{Cli, Command};
use reportd::{db, demo, ipc, logging};
use std::io::{self, BufRead, Write};

fn serve(mut state: ipc::AppState) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let resp = match serde_json::from_str::<ipc::Request>(&line) {
            Ok(req) => ipc::handle_request(&mut state, req),
            // Can't reply with an id we could not parse.
            Err(e) => ipc::bad_json(e.to_string()),
        };
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        None | Some(Command::Serve) => {
            let mut state = ipc::AppState::default();
            if let Some(path) = cli.workspace.as_deref() {
                ipc::select_workspace(&mut state, path)?;
            }
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "serving on stdin");
            serve(state);
        }
        Some(Command::Demo(args)) => {
            let Some(path) = cli.workspace.as_deref() else {
                anyhow::bail!("demo needs --workspace or REPORTD_WORKSPACE");
            };
            let conn = db::open_db(path)?;
            let stdout = io::stdout();
            demo::run(&conn, &args, &mut stdout.lock())?;
        }
    }
    Ok(())
}
