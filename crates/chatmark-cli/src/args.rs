use chatmark_config::OutputFormat;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: chatmark [--json | --text] [FILE]\n\
                         Formats a chat message read from FILE, or stdin when FILE is absent or `-`.";

/// Where the raw message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Format {
        input: Input,
        /// Overrides the configured output format when set.
        format: Option<OutputFormat>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("unexpected argument '{0}'")]
    ExtraArgument(String),
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut input = None;
    let mut format = None;

    for arg in args.into_iter().map(Into::into) {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--json" => format = Some(OutputFormat::Json),
            "--text" => format = Some(OutputFormat::Text),
            "-" if input.is_none() => input = Some(Input::Stdin),
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(ArgsError::UnknownFlag(arg));
            }
            _ if input.is_none() => input = Some(Input::File(PathBuf::from(arg))),
            _ => return Err(ArgsError::ExtraArgument(arg)),
        }
    }

    Ok(Command::Format {
        input: input.unwrap_or(Input::Stdin),
        format,
    })
}
