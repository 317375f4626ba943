use super::{ApiRequest, HttpMethod};
use crate::{InstructorStats, Submission};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardStats;

impl ApiRequest for DashboardStats {
    type Response = InstructorStats;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/instructor/dashboard/stats".into()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecentSubmissions;

impl ApiRequest for RecentSubmissions {
    type Response = Vec<Submission>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/instructor/dashboard/recent-submissions".into()
    }
}
