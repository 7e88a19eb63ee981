pub mod list_io;
