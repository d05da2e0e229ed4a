pub mod applications;
pub mod categories;
pub mod jobs;
pub mod users;
