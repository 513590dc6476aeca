#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod question;
pub mod quiz;

pub use question::Question;
pub use quiz::{Choice, Entry, Quiz};
