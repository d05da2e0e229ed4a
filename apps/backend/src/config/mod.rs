//! Process configuration. Only `main` reads the environment; everything
//! downstream receives these values explicitly.

pub mod db;
pub mod env;
pub mod server;
