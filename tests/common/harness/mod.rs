//! Test harness: isolated environments and a fluent command wrapper.

mod command;
mod env;

pub use command::NotaCommand;
pub use env::TestEnv;
