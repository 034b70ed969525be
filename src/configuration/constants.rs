pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod common {
    pub const DEFAULT_BACKEND_URL: &'static str = "https://api.kernelci.org";
    pub const TEST_SUITE_PATH: &'static str = "/test/suite";
    pub const TEST_CASE_PATH: &'static str = "/test/case";
    pub const ENV_PREFIX: &'static str = "KCI";
}

pub mod layout {
    pub const COLUMN_WIDTH: usize = 24;
    pub const STATUS_WIDTH: usize = 6;
    pub const NAME_DISPLAY_CHARS: usize = 22;
    pub const RULE_WIDTH: usize = 80;
    pub const DATE_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S";
    pub const MISSING: &'static str = "n/a";
}
