//! Lifecycle managers. Each operation takes a connection (usually the
//! request's transaction) and an explicit `now`.

pub mod applications;
pub mod jobs;
pub mod users;

pub use applications::ApplicationService;
pub use jobs::{Eligibility, JobDraft, JobService};
pub use users::{NewAccount, Registration, UserService};
