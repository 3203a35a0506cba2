//! Tracing bootstrap shared by composition roots and the test harness

mod tracing_setup;

pub use tracing_setup::{init_tracing, try_init_tracing, TracingConfig, TracingError};
