//! compute unit name tags

/// family of per-index tag types.
///
/// `Unit<0>`, `Unit<1>`, ... must be pairwise distinct types. the queue
/// receives one per submission, which is what lets a backend treat every
/// compute unit as its own independently synthesized kernel.
pub trait UnitName {
    /// tag of compute unit `ID`.
    type Unit<const ID: usize>: 'static;
}

/// declare a tag type `Unit<const ID: usize>` and its [`UnitName`] family.
///
/// ```rust
/// use spatial_compute_units::{compute_unit_name, UnitName};
///
/// compute_unit_name!(pub Producers => Producer);
///
/// fn tag<N: UnitName, const ID: usize>() -> &'static str {
///     std::any::type_name::<N::Unit<ID>>()
/// }
///
/// assert!(tag::<Producers, 2>().ends_with("Producer<2>"));
/// ```
#[macro_export]
macro_rules! compute_unit_name {
    ($(#[$meta:meta])* $vis:vis $family:ident => $unit:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $unit<const ID: usize>;

        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $family;

        impl $crate::UnitName for $family {
            type Unit<const ID: usize> = $unit<ID>;
        }
    };
}
