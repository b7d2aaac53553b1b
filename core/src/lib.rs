pub mod applet;
pub mod config;
pub mod constants;
pub mod exec;
pub mod util;

pub use applet::{Applet, AppletEntry, AppletId, AppletRegistry, AppletTable};
pub use exec::{DispatchConfig, Dispatcher, ExecError, ExecHost, OsHost};
pub use util::fs_util::is_executable;
pub use util::search_path::{exists_in_path, Cursor, SearchPath};
