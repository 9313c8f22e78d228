pub mod file_record;
pub mod view_state;
