pub mod config;
pub mod profile;
pub mod todo;

pub use config::*;
pub use profile::*;
pub use todo::*;
