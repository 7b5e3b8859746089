#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub json: bool,
    pub input: Option<String>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("help requested")]
    Help,
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("unexpected argument: {0}")]
    ExtraArgument(String),
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} [--json] [<base64 string | file>]")
}

/// Parses the arguments after the program name.
///
/// Anything starting with `-` other than `--json`, `-h` and `--help` is rejected.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Args, UsageError> {
    let mut parsed = Args::default();

    for arg in args {
        match arg.as_ref() {
            "--json" => parsed.json = true,
            "-h" | "--help" => return Err(UsageError::Help),
            option if option.starts_with('-') => {
                return Err(UsageError::UnknownOption(option.to_string()));
            }
            value if parsed.input.is_none() => parsed.input = Some(value.to_string()),
            value => return Err(UsageError::ExtraArgument(value.to_string())),
        }
    }

    Ok(parsed)
}
