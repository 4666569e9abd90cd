// Route path constants - single source of truth for the served paths

pub const HOME: &str = "/";
pub const HEALTH: &str = "/actuator/health";
