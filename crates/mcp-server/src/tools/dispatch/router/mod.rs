pub(super) mod error;
pub(super) mod search_file;
