pub mod action_plan;
pub mod daily_log;
pub mod plan;
