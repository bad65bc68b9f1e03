//! compute unit submission
//!
//! `submit_compute_units::<N, Names, _, _>` drives an unrolled loop over
//! `0..N`. iteration `I` clones the kernel and submits
//! `move || kernel.run(Index::<I>)` under the tag `Names::Unit<I>`, so the
//! queue sees N tasks with N distinct tag types and N separately
//! instantiated bodies.

use crate::error::SubmitError;
use crate::kernel::ComputeUnit;
use crate::name::UnitName;
use crate::queue::Queue;
use log::{debug, info};
use spatial_unroll::{unroll_count, Count, Index, UnitOfWork, Unroll};
use std::any::type_name;
use std::marker::PhantomData;

/// outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submitted {
    /// number of compute units handed to the queue.
    pub count: usize,
}

/// submit `N` compute units running `kernel` to `queue`.
///
/// unit `i` is tagged `Names::Unit<i>` and runs `kernel.run(Index::<i>)`.
/// submission order is `0..N`; execution order is up to the queue. queue
/// handles are not retained.
///
/// the first queue failure stops submission: units before it stay
/// submitted, units after it are never created.
///
/// ```rust
/// use spatial_compute_units::{
///     compute_unit_name, submit_compute_units, ComputeUnit, HostQueue, Index, QueueConfig,
/// };
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// compute_unit_name!(Adders => Adder);
///
/// #[derive(Clone)]
/// struct Add(Arc<AtomicUsize>);
///
/// impl ComputeUnit for Add {
///     fn run<const ID: usize>(self, _id: Index<ID>) {
///         self.0.fetch_add(ID, Ordering::Relaxed);
///     }
/// }
///
/// let total = Arc::new(AtomicUsize::new(0));
/// let queue = HostQueue::new(QueueConfig::default()).unwrap();
///
/// let submitted = submit_compute_units::<4, Adders, _, _>(&queue, Add(total.clone())).unwrap();
/// queue.wait().unwrap();
///
/// assert_eq!(submitted.count, 4);
/// assert_eq!(total.load(Ordering::Relaxed), 0 + 1 + 2 + 3);
/// ```
pub fn submit_compute_units<const N: usize, Names, Q, K>(
    queue: &Q,
    kernel: K,
) -> Result<Submitted, SubmitError>
where
    Names: UnitName,
    Q: Queue + ?Sized,
    K: ComputeUnit,
    Count<N>: Unroll,
{
    let mut submitter = Submitter::<Names, Q, K> {
        queue,
        kernel,
        count: N,
        submitted: 0,
        failure: None,
        _names: PhantomData,
    };

    unroll_count::<N, _>(&mut submitter);

    if let Some(err) = submitter.failure {
        return Err(err);
    }

    info!(
        "submitted {} compute units of {}",
        submitter.submitted,
        type_name::<K>()
    );
    Ok(Submitted {
        count: submitter.submitted,
    })
}

/// unrolled loop body: one queue submission per index.
struct Submitter<'q, Names, Q: ?Sized, K> {
    queue: &'q Q,
    kernel: K,
    count: usize,
    submitted: usize,
    failure: Option<SubmitError>,
    _names: PhantomData<fn() -> Names>,
}

impl<Names, Q, K> UnitOfWork for Submitter<'_, Names, Q, K>
where
    Names: UnitName,
    Q: Queue + ?Sized,
    K: ComputeUnit,
{
    fn call<const I: usize>(&mut self, id: Index<I>) {
        if self.failure.is_some() {
            return;
        }

        let kernel = self.kernel.clone();
        match self
            .queue
            .single_task::<Names::Unit<I>, _>(move || kernel.run(id))
        {
            Ok(_event) => {
                debug!(
                    "compute unit {}/{} submitted as {}",
                    I,
                    self.count,
                    type_name::<Names::Unit<I>>()
                );
                self.submitted += 1;
            }
            Err(source) => {
                self.failure = Some(SubmitError::Rejected {
                    unit: I,
                    count: self.count,
                    source: Box::new(source),
                });
            }
        }
    }
}
