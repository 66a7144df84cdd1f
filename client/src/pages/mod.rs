pub mod planner;
pub mod results;
