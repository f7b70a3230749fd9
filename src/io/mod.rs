pub mod config_io;
pub mod recovery;
pub mod state;
pub mod todo_io;
