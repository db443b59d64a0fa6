//! Background Tasks Module
//!
//! Contains background tasks that run periodically while a cache is alive.
//!
//! # Tasks
//! - Sweep: Removes expired entries and trims namespaces to capacity

mod sweeper;

pub use sweeper::spawn_sweep_task;
