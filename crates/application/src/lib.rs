//! Maintenance-window checker application layer: ports, the probing
//! service, and one use case per operator command.
pub mod ports;
pub mod services;
pub mod use_cases;
