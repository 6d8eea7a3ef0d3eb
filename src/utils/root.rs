//! Re-export core/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{borrow, fmt, hash, iter, mem, ops, result, slice, sync};

#[cfg(feature = "with-std")]
pub use std::{borrow, fmt, hash, iter, mem, ops, result, slice, sync};

pub use alloc::{string, vec};
