//! The value cloning capability.
//!
//! Copy construction of a table requires independent copies of its values.
//! Rather than inspecting values at run-time, the capability is passed
//! explicitly, and only to `ProbingTable::copy_with`: a table whose values
//! cannot be cloned simply cannot be copied.

/// ValueCloner
///
/// Produces an independent copy of a value.
///
/// Implemented for any `Fn(&V) -> V`, and by `CloneValues` for `V: Clone`.
pub trait ValueCloner<V> {
    /// Copies the value.
    fn clone_value(&self, value: &V) -> V;
}

/// CloneValues
///
/// Copies values with their `Clone` implementation.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct CloneValues;

impl<V: Clone> ValueCloner<V> for CloneValues {
    fn clone_value(&self, value: &V) -> V { value.clone() }
}

impl<V, F> ValueCloner<V> for F
where
    F: Fn(&V) -> V,
{
    fn clone_value(&self, value: &V) -> V { self(value) }
}

#[cfg(test)]
mod tests {

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn clone_values() {
    assert_eq!(String::from("Hello"), CloneValues.clone_value(&String::from("Hello")));
}

#[test]
fn closure_deep_copies() {
    let original = Rc::new(Cell::new(1));
    let deep = |v: &Rc<Cell<i32>>| Rc::new(Cell::new(v.get()));

    let copy = deep.clone_value(&original);
    copy.set(2);

    assert_eq!(1, original.get());
    assert!(!Rc::ptr_eq(&original, &copy));
}

}
