//! compute units for spatial accelerators.
//!
//! replicates one kernel N times, where N is a compile-time constant. every
//! replica is a separate submission to an execution queue, tagged with its own
//! type and running its own instantiation of the kernel, so a spatial backend
//! can lay out N independent physical units instead of time-sharing one.
//!
//! # architecture
//!
//! ```text
//! submit_compute_units::<N, Names, _, _>(&queue, kernel)
//!          │
//!          ▼
//! unroll_count::<N>  ── compile-time expansion, one call per index
//!          │
//!          ├── queue.single_task::<Names::Unit<0>>(|| kernel.run(Index::<0>))
//!          ├── queue.single_task::<Names::Unit<1>>(|| kernel.run(Index::<1>))
//!          └── ...
//! ```
//!
//! - **Queue**: the execution queue contract (external collaborator)
//! - **ComputeUnit**: the kernel, specialized per `Index<ID>`
//! - **UnitName**: tag family, `Unit<ID>` distinct for every `ID`
//! - **HostQueue**: in-process queue, one thread per submitted unit
//!
//! # example
//!
//! ```rust
//! use spatial_compute_units::{
//!     compute_unit_name, submit_compute_units, ComputeUnit, HostQueue, Index, QueueConfig,
//! };
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//!
//! compute_unit_name!(Filters => Filter);
//!
//! #[derive(Clone)]
//! struct Taps(Arc<Mutex<Vec<usize>>>);
//!
//! impl ComputeUnit for Taps {
//!     fn run<const ID: usize>(self, _id: Index<ID>) {
//!         // per-unit buffer sized at compile time
//!         let window = [0u32; ID];
//!         self.0.lock().push(window.len());
//!     }
//! }
//!
//! let queue = HostQueue::new(QueueConfig::new().with_thread_name_prefix("filter")).unwrap();
//! let taps = Taps(Arc::new(Mutex::new(Vec::new())));
//!
//! submit_compute_units::<3, Filters, _, _>(&queue, taps.clone()).unwrap();
//! queue.wait().unwrap();
//!
//! let mut sizes = taps.0.lock().clone();
//! sizes.sort();
//! assert_eq!(sizes, [0, 1, 2]);
//! ```

#![warn(rust_2018_idioms)]

mod affinity;
pub mod config;
pub mod error;
pub mod host;
mod kernel;
mod name;
pub mod queue;
mod submit;

pub use config::QueueConfig;
pub use error::{AffinityError, QueueError, SubmitError};
pub use host::{HostEvent, HostQueue};
pub use kernel::ComputeUnit;
pub use name::UnitName;
pub use queue::Queue;
pub use spatial_unroll::Index;
pub use submit::{submit_compute_units, Submitted};
