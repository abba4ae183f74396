//! Background Tasks Module
//!
//! Contains optional background tasks that run alongside a shared cache.
//!
//! # Tasks
//! - Sweep: Purges expired cache entries at a fixed interval

mod sweep;

pub use sweep::spawn_sweep_task;
