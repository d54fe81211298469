use std::sync::LazyLock;
use std::time::Instant;

pub mod commands;
pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
