//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The planner page keeps a single `RwSignal<PlannerForm>` in context. Row
//! bookkeeping and validation live on `PlannerForm`; this module only adapts
//! raw input strings to the model.

pub mod planner;
