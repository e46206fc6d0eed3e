//! # Models Module
//!
//! Entity shapes as the REST backend produces and accepts them, plus the
//! notice model shared by forms and lists. Nothing here is persisted
//! beyond the component instance that fetched it.

pub mod application;
pub mod company;
pub mod job;
pub mod notice;
pub mod user;

pub use application::{Application, ApplicationStatus, NewApplication};
pub use company::{Company, CompanySummary, NewCompany};
pub use job::{Job, JobPatch, JobSummary, NewJob};
pub use notice::{Notice, NoticeKind};
pub use user::{NewUser, User, UserSummary};
