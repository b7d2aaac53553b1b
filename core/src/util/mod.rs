pub mod fs_util;
pub mod log;
pub mod search_path;
#[cfg(test)]
pub(crate) mod test_util;
