use std::io::{Write, stdout};

use tierlist_probe::cli::{UsageError, parse_args, usage};
use tierlist_probe::{Report, logger::setup_logger, resolve_input};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("decode-tierlist", String::as_str);

    let args = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(UsageError::Help) => {
            eprintln!("{}", usage(program));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", usage(program));
            std::process::exit(1);
        }
    };

    setup_logger();
    log::debug!(
        "{} v{} started",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let input = resolve_input(args.input.as_deref())?;
    let report = Report::build(&input);

    let mut out = stdout().lock();
    if args.json {
        report.write_json(&mut out)?;
    } else {
        report.write_text(&mut out)?;
    }
    out.flush()?;

    Ok(())
}
