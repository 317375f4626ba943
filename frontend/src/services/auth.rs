use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::web::http::Transport;
use ocms_shared::protocol::{LoginRequest, Me, RegisterRequest};
use ocms_shared::{AuthResponse, User};

pub struct AuthService<'a, T> {
    pub(super) api: &'a ApiClient<T>,
}

impl<T: Transport> AuthService<'_, T> {
    /// 用当前 token 换取用户信息
    pub async fn me(&self) -> ApiResult<User> {
        Ok(self.api.call(&Me).await?.user)
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        self.api
            .call(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
    }

    pub async fn register(&self, req: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.api.call(req).await
    }
}
