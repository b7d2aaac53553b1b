pub mod default_constants {
    pub const PATH_DELIMITER: u8 = b':';
    pub const PATH_VAR: &str = "PATH";
    pub const CONFIG_RELATIVE_PATH: &str = ".config/abox/config.toml";
    pub const LOG_LEVEL: &str = "warn";
}

pub mod env_variables {
    pub const LOG_LEVEL_VAR: &str = "ABOX_LOG_LEVEL";
    pub const CONFIG_PATH_ENV: &str = "ABOX_CONFIG_PATH";
}

/// Exit statuses mandated by POSIX for a command that could not be run.
pub mod exit_codes {
    pub const NOT_EXECUTABLE: i32 = 126;
    pub const NOT_FOUND: i32 = 127;
}
