// Common test utilities

pub mod tracing;
