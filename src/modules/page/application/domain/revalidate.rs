//! How long a shared cache may serve each page before it is regenerated.

use std::time::Duration;

pub const HOME: Duration = Duration::from_secs(3600);
pub const PROJECTS: Duration = Duration::from_secs(10);
pub const PROJECT_DETAIL: Duration = Duration::from_secs(10);
pub const BLOG: Duration = Duration::from_secs(3600);
pub const BLOG_DETAIL: Duration = Duration::from_secs(3600);
