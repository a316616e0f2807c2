//! Output formatting

pub mod console;
pub mod labels;
