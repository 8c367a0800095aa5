//! Table algorithms operating on a bare bucket array.

pub mod find;
pub mod insert;
pub mod locate;
pub mod remove;
