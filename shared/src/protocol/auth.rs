use super::{ApiRequest, HttpMethod};
use crate::{AuthResponse, MeResponse, Role};
use serde::{Deserialize, Serialize};

/// 当前登录用户
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Me;

impl ApiRequest for Me {
    type Response = MeResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/auth/me".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/auth/login".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/auth/register".into()
    }
}
