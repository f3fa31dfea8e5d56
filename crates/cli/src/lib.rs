//! fontdecl CLI library.

pub mod cli;
pub mod summary;
