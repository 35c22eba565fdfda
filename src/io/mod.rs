pub mod table_read;
pub mod table_write;
