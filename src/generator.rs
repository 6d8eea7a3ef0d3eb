//! The generator capability.
//!
//! Seeding a table with generated keys and values, as used by demonstrations
//! and tests, is driven by caller-supplied generators: the table itself never
//! produces data.

/// Generator
///
/// Produces a new item on each call.
///
/// Implemented for any `FnMut() -> T`.
///
/// #   Example
///
/// ```
/// use linprobe::generator::Generator;
///
/// let mut counter = 0;
/// let mut next = || { counter += 1; counter };
///
/// assert_eq!(1, next.generate());
/// assert_eq!(2, next.generate());
/// ```
pub trait Generator<T> {
    /// Produces the next item.
    fn generate(&mut self) -> T;
}

impl<T, F> Generator<T> for F
where
    F: FnMut() -> T,
{
    fn generate(&mut self) -> T { self() }
}
