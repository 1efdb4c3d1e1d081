pub mod cli;
pub mod domain;
pub mod errors;
mod helper;
pub mod prelude;
pub mod storage;
pub mod web;
