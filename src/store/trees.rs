pub const PROGRESS: &str = "drill_progress";
