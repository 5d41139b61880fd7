#[macro_use]
extern crate log;

pub mod tasks;
pub mod utils;
