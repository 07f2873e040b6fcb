use thiserror::Error;

/// Errors raised while parsing or compiling operator commands.
///
/// None of these are fatal: a failed command is rejected whole, with no
/// partial mutation, and the simulation carries on.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("unknown behavior type `{0}`")]
    UnknownBehavior(String),

    #[error("unknown command type `{0}`")]
    UnknownCommandType(String),

    #[error("missing or invalid parameter `{0}`")]
    Parameter(&'static str),

    #[error("unknown direction `{0}`")]
    Direction(String),

    #[error("no drone with id {0}")]
    DroneNotFound(u32),

    #[error("could not parse command text: {0}")]
    Text(String),

    #[error("translator failure: {0}")]
    Translator(String),

    #[error("malformed command JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;
