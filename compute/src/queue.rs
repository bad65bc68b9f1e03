//! execution queue contract
//!
//! the queue is the external collaborator compute units are submitted to: it
//! takes a zero-argument task plus a type tag and decides when and where the
//! task runs. a hardware backend lays out one physical unit per distinct tag;
//! [`HostQueue`](crate::HostQueue) runs each task on its own thread.

/// sink for tagged single tasks.
pub trait Queue {
    /// handle for one submitted task.
    type Event;

    /// submission failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// submit `task` under the type tag `Name`.
    ///
    /// submissions with distinct `Name` types are independent units; the
    /// queue may run them concurrently and in any order.
    fn single_task<Name, F>(&self, task: F) -> Result<Self::Event, Self::Error>
    where
        Name: 'static,
        F: FnOnce() + Send + 'static;
}

impl<Q: Queue + ?Sized> Queue for &Q {
    type Event = Q::Event;
    type Error = Q::Error;

    #[inline]
    fn single_task<Name, F>(&self, task: F) -> Result<Self::Event, Self::Error>
    where
        Name: 'static,
        F: FnOnce() + Send + 'static,
    {
        (**self).single_task::<Name, F>(task)
    }
}
