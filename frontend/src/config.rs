//! 应用配置
//!
//! 编译期通过环境变量覆盖 (Trunk 构建时注入)，未设置则使用默认值：
//!
//! | 变量 | 默认值 |
//! |---|---|
//! | `OCMS_API_URL` | `http://localhost:5000/api` |
//! | `OCMS_TOKEN_KEY` | `token` |
//! | `OCMS_FAN_OUT_LIMIT` | `4` |

use leptos::prelude::*;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_FAN_OUT_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 后端 API 根地址 (不含结尾 `/`)
    pub api_url: String,
    /// localStorage 中保存 token 的键
    pub token_key: String,
    /// 依赖型逐项请求的最大并发数
    pub fan_out_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            fan_out_limit: DEFAULT_FAN_OUT_LIMIT,
        }
    }
}

impl AppConfig {
    /// 读取编译期环境变量
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("OCMS_API_URL"),
            option_env!("OCMS_TOKEN_KEY"),
            option_env!("OCMS_FAN_OUT_LIMIT"),
        )
    }

    fn from_values(api_url: Option<&str>, token_key: Option<&str>, limit: Option<&str>) -> Self {
        let defaults = Self::default();
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }

        Self {
            api_url: non_empty(api_url)
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            token_key: non_empty(token_key)
                .map(str::to_string)
                .unwrap_or(defaults.token_key),
            fan_out_limit: non_empty(limit)
                .and_then(|l| l.parse::<usize>().ok())
                .filter(|l| *l > 0)
                .unwrap_or(defaults.fan_out_limit),
        }
    }
}

/// 从 Context 获取配置，未提供时退回默认值
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_values(None, None, None), AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig::from_values(
            Some("https://ocms.example.com/api/"),
            Some("ocms_token"),
            Some("8"),
        );
        assert_eq!(cfg.api_url, "https://ocms.example.com/api");
        assert_eq!(cfg.token_key, "ocms_token");
        assert_eq!(cfg.fan_out_limit, 8);
    }

    #[test]
    fn test_invalid_limit_ignored() {
        assert_eq!(AppConfig::from_values(None, Some(" "), Some("0")).fan_out_limit, 4);
        assert_eq!(AppConfig::from_values(None, None, Some("many")).fan_out_limit, 4);
        assert_eq!(AppConfig::from_values(None, Some(" "), None).token_key, "token");
    }
}
