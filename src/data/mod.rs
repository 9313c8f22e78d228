pub mod file_store;
pub mod loader;
pub mod opener;
