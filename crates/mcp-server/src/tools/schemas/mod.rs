pub mod search_file;
