use abox_core::constants::exit_codes::NOT_FOUND;

pub const PROGRAM_NAME: &str = "abox";

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboxExitCode {
    Success = 0,
    Error = 1,
    InvalidArgs = 2,
    ConfigError = 100,
    CommandNotFound = NOT_FOUND,
}

impl From<AboxExitCode> for i32 {
    fn from(val: AboxExitCode) -> Self {
        val as i32
    }
}
