//! Browser helpers that compile to no-ops outside the `hydrate` build.

pub mod alert;
