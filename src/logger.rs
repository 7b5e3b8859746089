use std::io::{self, Write};

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

pub const DEBUG_ENV: &str = "TIERLIST_DEBUG";

fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Warn, // keep the report clean unless asked
    }
}

fn logging_level() -> LevelFilter {
    // marker files next to the executable win over the environment
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            if dir.join("trace").exists() {
                return LevelFilter::Trace;
            }
            if dir.join("debug").exists() {
                return LevelFilter::Debug;
            }
        }
    }
    level_from_env(std::env::var(DEBUG_ENV).ok().as_deref())
}

fn dispatch(level_filter: LevelFilter, sink: Box<dyn Write + Send>) -> Dispatch {
    Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().unwrap_or(0);

            if level_filter == LevelFilter::Info {
                out.finish(format_args!(
                    "[{}]: {} <{}:{}>",
                    record.level(),
                    message,
                    file,
                    line,
                ));
            } else {
                out.finish(format_args!(
                    "[{}][{}]: {} <{}:{}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                    file,
                    line,
                ));
            }
        })
        .level(level_filter)
        .chain(sink)
}

/// Routes `log` output to stderr so stdout only carries the report.
pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = dispatch(level_filter, Box::new(io::stderr())).apply() {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
