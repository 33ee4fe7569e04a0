pub mod classify;
pub mod detail;
pub mod list;
