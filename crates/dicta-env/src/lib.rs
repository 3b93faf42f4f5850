pub mod catalog;
pub mod environment;
pub mod io;
pub mod shell;

pub use catalog::Catalog;
pub use environment::{Environment, Runtime, Selection, compose};
pub use shell::ShellConfig;
