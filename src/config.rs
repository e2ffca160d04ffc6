use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub photos: PhotoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 上游退货接口
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub returns_url: String,
    pub timeout_secs: u64,
}

/// 静态图片资源
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RETURNS_URL: &str = "http://localhost:9000/api/returns";
const DEFAULT_PHOTO_BASE_URL: &str = "http://localhost:9000/photos";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            upstream: UpstreamConfig {
                returns_url: DEFAULT_RETURNS_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            photos: PhotoConfig {
                base_url: DEFAULT_PHOTO_BASE_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    /// 例: DASHBOARD_SERVER__PORT=9000, DASHBOARD_UPSTREAM__RETURNS_URL=https://...
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", DEFAULT_PORT as i64)?
            .set_default("upstream.returns_url", DEFAULT_RETURNS_URL)?
            .set_default("upstream.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("photos.base_url", DEFAULT_PHOTO_BASE_URL)?
            .set_default("photos.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .add_source(
                config::Environment::with_prefix("DASHBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
