use spatial_unroll::Index;

/// the work a compute unit performs, specialized per unit identity.
///
/// `run::<ID>` is instantiated once per compute unit, so the body can pick
/// resources by `ID` at compile time (a pipe from an array, a buffer size,
/// a branch). every unit gets its own clone of the kernel.
///
/// ```rust
/// use spatial_compute_units::{ComputeUnit, Index};
///
/// #[derive(Clone)]
/// struct Scale {
///     factor: u32,
/// }
///
/// impl ComputeUnit for Scale {
///     fn run<const ID: usize>(self, _id: Index<ID>) {
///         let lanes = [self.factor; ID];
///         assert_eq!(lanes.len(), ID);
///     }
/// }
/// ```
///
/// a closure over a runtime index is not a compute unit:
///
/// ```rust,compile_fail
/// use spatial_compute_units::{compute_unit_name, submit_compute_units, HostQueue, QueueConfig};
///
/// compute_unit_name!(Workers => Worker);
///
/// let queue = HostQueue::new(QueueConfig::default()).unwrap();
/// let kernel = |id: usize| println!("unit {id}");
/// submit_compute_units::<3, Workers, _, _>(&queue, kernel).unwrap();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be submitted as a compute unit",
    label = "expected a callable taking a single compile-time `Index<ID>` argument",
    note = "implement `ComputeUnit` with `fn run<const ID: usize>(self, id: Index<ID>)`; closures cannot be generic over a const"
)]
pub trait ComputeUnit: Clone + Send + 'static {
    /// body of compute unit `ID`.
    fn run<const ID: usize>(self, id: Index<ID>);
}
