use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::web::http::Transport;
use ocms_shared::protocol::{DashboardStats, RecentSubmissions};
use ocms_shared::{InstructorStats, Submission};

pub struct InstructorService<'a, T> {
    pub(super) api: &'a ApiClient<T>,
}

impl<T: Transport> InstructorService<'_, T> {
    pub async fn dashboard_stats(&self) -> ApiResult<InstructorStats> {
        self.api.call(&DashboardStats).await
    }

    pub async fn recent_submissions(&self) -> ApiResult<Vec<Submission>> {
        self.api.call(&RecentSubmissions).await
    }
}
