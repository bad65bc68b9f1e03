use std::io;
use thiserror::Error;

/// boxed queue failure carried by [`SubmitError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// errors from submitting compute units.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// the queue refused unit `unit`; units after it were not submitted.
    #[error("Queue rejected compute unit {unit} of {count}")]
    Rejected {
        unit: usize,
        count: usize,
        #[source]
        source: BoxError,
    },
}

impl SubmitError {
    /// index of the unit the queue refused.
    pub fn unit(&self) -> usize {
        match self {
            SubmitError::Rejected { unit, .. } => *unit,
        }
    }
}

/// errors from the host queue.
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Invalid queue config: {0}")]
    InvalidConfig(String),

    #[error("Queue saturated: {limit} tasks in flight")]
    Saturated { limit: usize },

    #[error("Failed to spawn task {task}")]
    Spawn {
        task: u64,
        #[source]
        source: io::Error,
    },

    #[error("Task {task} ({name}) panicked")]
    TaskPanicked { task: u64, name: &'static str },
}

/// errors from pinning a host task to a CPU core.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AffinityError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CPU affinity operations are not supported on this platform")]
    NotSupported,

    #[error("CPU {cpu} is invalid (max CPU is {max})")]
    InvalidCpu { cpu: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, QueueError>;
