//! Hooks of the ProbingTable.

#[cfg(feature = "with-std")]
use std::collections::hash_map;

use super::root::hash;

/// KeyHooks
///
/// There are two important hooks for a ProbingTable:
/// -   The hashing algorithm, from which the home index of a key is derived.
/// -   The equality of keys, which decides whether a slot holds a key.
///
/// A single table uses the same hooks for every index computation and every
/// comparison, hence the hooks are held by the table itself.
///
/// The hooks are parameterized by the type they operate on, so that a table
/// of `String` can be looked up by `str` whenever the hooks cover both.
/// As with `Borrow`, the hash and equality of a borrowed form must agree with
/// those of the owned form.
///
/// Also see `DefaultKeyHooks` for the default, when the `with-std` feature is
/// used, and `BuildHasherHooks` for any `BuildHasher`.
pub trait KeyHooks<Q: ?Sized> {
    /// Computes the hash of the key.
    fn hash(&self, key: &Q) -> u64;

    /// Checks whether the two keys are equal.
    fn eq(&self, left: &Q, right: &Q) -> bool;
}

/// BuildHasherHooks
///
/// Hooks hashing with the provided `BuildHasher`, and comparing with `Eq`.
///
/// #   Example
///
/// ```
/// use std::collections::hash_map::RandomState;
///
/// use linprobe::hooks::{BuildHasherHooks, KeyHooks};
///
/// let hooks = BuildHasherHooks::new(RandomState::new());
///
/// assert_eq!(hooks.hash("Hello"), hooks.hash("Hello"));
/// assert!(hooks.eq("Hello", "Hello"));
/// assert!(!hooks.eq("Hello", "World"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildHasherHooks<S>(S);

impl<S> BuildHasherHooks<S> {
    /// Creates an instance.
    pub fn new(builder: S) -> Self { Self(builder) }
}

impl<Q, S> KeyHooks<Q> for BuildHasherHooks<S>
where
    Q: ?Sized + Eq + hash::Hash,
    S: hash::BuildHasher,
{
    fn hash(&self, key: &Q) -> u64 { hash_with(&self.0, key) }

    fn eq(&self, left: &Q, right: &Q) -> bool { left == right }
}

/// DefaultKeyHooks
///
/// Default hooks for the ProbingTable:
/// -   hashing with a randomly seeded `RandomState`.
/// -   comparing with `Eq`.
#[cfg(feature = "with-std")]
#[derive(Clone, Debug, Default)]
pub struct DefaultKeyHooks(hash_map::RandomState);

#[cfg(feature = "with-std")]
impl<Q> KeyHooks<Q> for DefaultKeyHooks
where
    Q: ?Sized + Eq + hash::Hash,
{
    fn hash(&self, key: &Q) -> u64 { hash_with(&self.0, key) }

    fn eq(&self, left: &Q, right: &Q) -> bool { left == right }
}

fn hash_with<Q, S>(builder: &S, key: &Q) -> u64
where
    Q: ?Sized + hash::Hash,
    S: hash::BuildHasher,
{
    use self::hash::Hasher;

    let mut hasher = builder.build_hasher();
    key.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn default_hooks_consistent() {
    let hooks = DefaultKeyHooks::default();

    assert_eq!(hooks.hash(&42u32), hooks.hash(&42u32));
    assert!(hooks.eq(&42u32, &42u32));
    assert!(!hooks.eq(&42u32, &43u32));
}

#[test]
fn default_hooks_borrowed_agree() {
    let hooks = DefaultKeyHooks::default();
    let owned = String::from("Hello");

    assert_eq!(hooks.hash(&owned), hooks.hash("Hello"));
}

#[test]
fn clones_hash_alike() {
    let hooks = DefaultKeyHooks::default();
    let clone = hooks.clone();

    assert_eq!(hooks.hash("World"), clone.hash("World"));
}

}
