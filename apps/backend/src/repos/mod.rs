//! Repository functions: adapter rows in, domain structs out.

pub mod applications;
pub mod categories;
pub mod jobs;
pub mod users;
