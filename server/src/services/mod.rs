//! Request-independent services called from the route layer.

pub mod planning;
