use thiserror::Error;

use swarm_command::CommandError;
use swarm_core::DroneId;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("no drone {0}")]
    DroneNotFound(DroneId),

    #[error(transparent)]
    Command(#[from] CommandError),
}

pub type SimResult<T> = Result<T, SimError>;
