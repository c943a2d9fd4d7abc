//! Output formatting for quotes

pub mod console;
pub mod formatter;
pub mod view;
