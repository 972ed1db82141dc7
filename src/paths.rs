pub const API_BASE: &str = "/api";

pub const SAMPLE: &str = "/sample";
pub const HEALTH: &str = "/health";
