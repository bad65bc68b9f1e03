//! host execution queue
//!
//! runs every submitted task on its own named OS thread. compute units are
//! independent hardware in the spatial model, and units chained through
//! channels block on each other, so tasks never share a worker.
//!
//! # lifecycle
//!
//! - `single_task` spawns the thread and returns a [`HostEvent`]
//! - the thread pins itself if cores are configured, runs the task under
//!   `catch_unwind` and marks its completion
//! - the next `single_task` joins tasks that finished cleanly; failed tasks
//!   are kept for `wait` to report
//! - [`HostQueue::wait`] joins everything submitted so far
//! - dropping the queue waits as well

use crate::affinity::pin_current_thread;
use crate::config::QueueConfig;
use crate::error::{QueueError, Result};
use crate::queue::Queue;
use log::{debug, error, info, warn};
use parking_lot::{Condvar, Mutex};
use std::any::type_name;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// task outcome shared between the task thread and its handles.
#[derive(Debug, Default)]
struct Completion {
    // None while running, Some(false) if the task panicked
    state: Mutex<Option<bool>>,
    ready: Condvar,
}

impl Completion {
    fn finish(&self, ok: bool) {
        *self.state.lock() = Some(ok);
        self.ready.notify_all();
    }

    fn is_done(&self) -> bool {
        self.state.lock().is_some()
    }

    fn succeeded(&self) -> bool {
        *self.state.lock() == Some(true)
    }

    /// block until finished, true on success.
    fn wait(&self) -> bool {
        let mut state = self.state.lock();
        loop {
            if let Some(ok) = *state {
                return ok;
            }
            self.ready.wait(&mut state);
        }
    }
}

/// handle to one task submitted to a [`HostQueue`].
#[derive(Debug, Clone)]
pub struct HostEvent {
    task: u64,
    name: &'static str,
    completion: Arc<Completion>,
}

impl HostEvent {
    /// queue-wide task id, in submission order.
    pub fn task_id(&self) -> u64 {
        self.task
    }

    /// type name of the tag the task was submitted under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// true once the task has finished, successfully or not.
    pub fn is_complete(&self) -> bool {
        self.completion.is_done()
    }

    /// block until the task has finished.
    pub fn wait(&self) -> Result<()> {
        if self.completion.wait() {
            Ok(())
        } else {
            Err(QueueError::TaskPanicked {
                task: self.task,
                name: self.name,
            })
        }
    }
}

struct InFlight {
    task: u64,
    name: &'static str,
    handle: JoinHandle<()>,
    completion: Arc<Completion>,
}

/// in-process execution queue, one thread per task.
pub struct HostQueue {
    config: Arc<QueueConfig>,
    next_task: AtomicU64,
    in_flight: Mutex<Vec<InFlight>>,
}

impl HostQueue {
    /// create a queue after validating `config`.
    pub fn new(config: QueueConfig) -> Result<Self> {
        config.validate()?;

        info!(
            "host queue ready (prefix={}, cores={:?}, max_in_flight={})",
            config.thread_name_prefix, config.cpu_cores, config.max_in_flight
        );

        Ok(Self {
            config: Arc::new(config),
            next_task: AtomicU64::new(0),
            in_flight: Mutex::new(Vec::new()),
        })
    }

    /// configuration the queue was created with.
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// number of submitted tasks that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
            .lock()
            .iter()
            .filter(|t| !t.completion.is_done())
            .count()
    }

    /// join every task submitted so far.
    ///
    /// all tasks are joined even if some failed; the first failure in
    /// submission order is returned.
    pub fn wait(&self) -> Result<()> {
        let tasks = std::mem::take(&mut *self.in_flight.lock());
        let mut first_failure = None;

        for task in tasks {
            // run_task catches panics, a failed join means the thread died
            // before it could mark completion
            let ok = task.handle.join().is_ok() && task.completion.wait();
            if !ok && first_failure.is_none() {
                first_failure = Some(QueueError::TaskPanicked {
                    task: task.task,
                    name: task.name,
                });
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Queue for HostQueue {
    type Event = HostEvent;
    type Error = QueueError;

    fn single_task<Name, F>(&self, task: F) -> Result<HostEvent>
    where
        Name: 'static,
        F: FnOnce() + Send + 'static,
    {
        let name = type_name::<Name>();
        let mut in_flight = self.in_flight.lock();
        reap_finished(&mut in_flight);

        let running = in_flight
            .iter()
            .filter(|t| !t.completion.is_done())
            .count();
        if running >= self.config.max_in_flight {
            return Err(QueueError::Saturated {
                limit: self.config.max_in_flight,
            });
        }

        let task_id = self.next_task.fetch_add(1, Ordering::Relaxed);
        let completion = Arc::new(Completion::default());
        let core = self.config.core_for(task_id);

        let mut builder =
            thread::Builder::new().name(format!("{}-{}", self.config.thread_name_prefix, task_id));
        if let Some(size) = self.config.stack_size {
            builder = builder.stack_size(size);
        }

        let done = Arc::clone(&completion);
        let handle = builder
            .spawn(move || run_task(task_id, name, core, task, &done))
            .map_err(|source| QueueError::Spawn {
                task: task_id,
                source,
            })?;

        debug!("task {} ({}) spawned", task_id, name);

        in_flight.push(InFlight {
            task: task_id,
            name,
            handle,
            completion: Arc::clone(&completion),
        });

        Ok(HostEvent {
            task: task_id,
            name,
            completion,
        })
    }
}

impl Drop for HostQueue {
    fn drop(&mut self) {
        if let Err(e) = self.wait() {
            warn!("host queue dropped with failed task: {}", e);
        }
    }
}

/// join and drop tasks that finished successfully. failed tasks stay so
/// [`HostQueue::wait`] can report them.
fn reap_finished(in_flight: &mut Vec<InFlight>) {
    if !in_flight.iter().any(|t| t.completion.succeeded()) {
        return;
    }

    let (finished, pending): (Vec<_>, Vec<_>) = in_flight
        .drain(..)
        .partition(|t| t.completion.succeeded());
    *in_flight = pending;

    for task in finished {
        if task.handle.join().is_err() {
            warn!("task {} ({}) thread exited abnormally", task.task, task.name);
        }
    }
}

/// task thread body.
fn run_task<F: FnOnce()>(
    task_id: u64,
    name: &'static str,
    core: Option<usize>,
    task: F,
    done: &Completion,
) {
    if let Some(core) = core {
        match pin_current_thread(core) {
            Ok(()) => debug!("task {} pinned to CPU core {}", task_id, core),
            Err(e) => warn!("Failed to pin task {} to CPU core {}: {}", task_id, core, e),
        }
    }

    let ok = panic::catch_unwind(AssertUnwindSafe(task)).is_ok();
    if !ok {
        error!("task {} ({}) panicked", task_id, name);
    }
    done.finish(ok);
}
