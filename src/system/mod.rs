//! Process-level setup

pub mod logging;
