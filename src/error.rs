use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 服务内所有错误
#[derive(Error, Debug)]
pub enum AppError {
    /// 上游返回非 2xx 状态
    #[error("Upstream responded with status {status}")]
    Upstream { status: u16 },

    /// 网络错误或超时
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// 上游 JSON 结构不是退货记录数组
    #[error("Unexpected upstream payload: {0}")]
    UnexpectedPayload(String),

    /// 缺少必填查询参数
    #[error("Missing {0} parameter")]
    MissingParam(&'static str),

    /// 查询参数无法解析
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// 配置中的 URL 无法作为基础地址
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParam(_) | AppError::InvalidQuery(_) | AppError::Csv(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidUrl(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
