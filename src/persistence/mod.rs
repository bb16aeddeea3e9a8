//! Persistence Module
//!
//! Output files are written next to their destination and renamed into
//! place, so a failed build never leaves a half-written atlas behind.

pub mod atomic_save_operations;

pub use atomic_save_operations::{temporary_path, write_atomic};
