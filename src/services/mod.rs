pub mod catalog;
pub mod schedule;
pub mod writer;
