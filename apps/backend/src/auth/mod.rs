pub mod gate;
pub mod jwt;
pub mod password;
