//! Domain layer: pure marketplace rules with no I/O.

pub mod applications;
pub mod jobs;
pub mod roles;

pub use applications::{ApplicationStatus, Decision};
pub use jobs::{Ineligibility, JobStatus, JobWindow};
pub use roles::Role;

#[cfg(test)]
mod tests_props_lifecycle;
