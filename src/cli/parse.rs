use super::CliFlags;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-c" | "--clip" => flags.clip = true,
            "-n" | "--no-symbols" => flags.no_symbols = true,
            "--save" => flags.save = true,
            "-l" | "--length" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue(args[i - 1].clone()))?;
                flags.length = Some(parse_length(value)?);
            }
            arg => {
                // --length=N
                if let Some(value) = arg.strip_prefix("--length=") {
                    flags.length = Some(parse_length(value)?);
                } else {
                    return Err(ParseError::UnknownArg(arg.to_string()));
                }
            }
        }
        i += 1;
    }

    Ok(flags)
}

// Negative values parse fine here; the generator rejects them.
fn parse_length(s: &str) -> Result<isize, ParseError> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}
