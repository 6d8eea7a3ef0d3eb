#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Linprobe Library
//!
//! An associative container built on open addressing with linear probing.
//!
//! -   The `ProbingTable`: a `HashMap`-like table over a single flat array of
//!     slots, with logical deletion through tombstones and automatic growth
//!     driven by a load-factor threshold.
//!
//! Hashing and key equality are injected through `KeyHooks`, and the value
//! cloning used by copy construction through `ValueCloner`.

extern crate alloc;

pub mod cloner;
pub mod config;
pub mod failure;
pub mod generator;
pub mod hooks;
pub mod table;

mod utils;

use self::utils::root;
