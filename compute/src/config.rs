use crate::error::QueueError;

/// configuration for the host queue.
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// prefix of task thread names, `{prefix}-{task_id}`.
    pub thread_name_prefix: String,

    /// stack size of task threads, platform default if `None`.
    pub stack_size: Option<usize>,

    /// CPU cores task threads are pinned to, round-robin by task id.
    /// empty: no pinning.
    pub cpu_cores: Vec<usize>,

    /// maximum number of unfinished tasks before submissions are rejected.
    pub max_in_flight: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            thread_name_prefix: "compute-unit".to_string(),
            stack_size: None,
            cpu_cores: Vec::new(),
            max_in_flight: 1024,
        }
    }
}

impl QueueConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// set thread name prefix.
    pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// set task thread stack size in bytes.
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    /// pin task threads to these cores, round-robin.
    pub fn with_cpu_cores(mut self, cores: impl IntoIterator<Item = usize>) -> Self {
        self.cpu_cores = cores.into_iter().collect();
        self
    }

    /// set the in-flight task limit.
    pub fn with_max_in_flight(mut self, limit: usize) -> Self {
        self.max_in_flight = limit;
        self
    }

    /// core for task `task_id`, if pinning is configured.
    pub fn core_for(&self, task_id: u64) -> Option<usize> {
        if self.cpu_cores.is_empty() {
            return None;
        }
        let slot = (task_id % self.cpu_cores.len() as u64) as usize;
        self.cpu_cores.get(slot).copied()
    }

    pub fn validate(&self) -> Result<(), QueueError> {
        if self.thread_name_prefix.is_empty() {
            return Err(QueueError::InvalidConfig(
                "Thread name prefix must not be empty".to_string(),
            ));
        }

        if self.thread_name_prefix.contains('\0') {
            return Err(QueueError::InvalidConfig(
                "Thread name prefix must not contain NUL bytes".to_string(),
            ));
        }

        if self.stack_size == Some(0) {
            return Err(QueueError::InvalidConfig(
                "Stack size must be greater than 0".to_string(),
            ));
        }

        if self.max_in_flight == 0 {
            return Err(QueueError::InvalidConfig(
                "Max in-flight tasks must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
