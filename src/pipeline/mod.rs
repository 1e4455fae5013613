//! Run-to-completion orchestration for the two pipelines

pub mod catalog;
pub mod events;
