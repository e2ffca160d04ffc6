use crate::error::AppError;
use crate::models::{DashboardSummary, RemoteSummary, ReturnsPayload};
use crate::report;
use crate::service::{aggregate, DashboardService, PhotoProber};
use crate::source::read_rows;
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Json, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

/// 共享状态
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardService>,
    pub photos: Arc<PhotoProber>,
}

/// 日期过滤参数 (YYYY-MM-DD)
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

impl DateQuery {
    fn date(&self) -> Option<&str> {
        self.date.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct PhotoQuery {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Json,
    Text,
    Csv,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub format: SummaryFormat,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 看板统计, 始终 200
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<DashboardSummary> {
    Json(state.dashboard.dashboard(query.date()).await)
}

/// 上游退货记录透传, 始终 200
pub async fn list_returns(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<ReturnsPayload> {
    Json(state.dashboard.returns(query.date()).await)
}

/// 上游退货记录汇总, 始终 200
pub async fn returns_summary(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<RemoteSummary> {
    Json(state.dashboard.remote_summary(query.date()).await)
}

/// 退货照片查找
pub async fn photos(
    State(state): State<AppState>,
    Query(query): Query<PhotoQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let id = query
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(AppError::MissingParam("id"))?;

    Ok(Json(state.photos.find_photos(id).await))
}

/// 上传 CSV 导出文件, 返回汇总 (json / text / csv)
/// 请求体按原始字节交给 CSV 解析, 编码错误同样以 JSON 400 返回
pub async fn upload_summary(
    query: Result<Query<SummaryQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|e| AppError::InvalidQuery(e.body_text()))?;
    let rows = read_rows(&body[..])?;
    let summary = aggregate(&rows);

    let response = match query.format {
        SummaryFormat::Json => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            report::export_json(&summary)?,
        )
            .into_response(),
        SummaryFormat::Text => {
            let mut buf = Vec::new();
            report::render_text(&summary, &mut buf)?;
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                buf,
            )
                .into_response()
        }
        SummaryFormat::Csv => {
            let mut buf = Vec::new();
            report::write_csv(&summary, &mut buf)?;
            (StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], buf).into_response()
        }
    };

    Ok(response)
}
