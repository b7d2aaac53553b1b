pub(crate) mod exec;
pub(crate) mod exists;
pub(crate) mod list;
