mod client;
pub mod domain;
pub mod mock;

pub use client::{ApiClient, ApiError};
pub use domain::{DataBundle, LoginResponse, Project, Task, TaskStatus, TimeEntry, User};
