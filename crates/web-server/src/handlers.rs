use crate::{AppState, error::AppError};
use analyzer::{
    DashboardQuery, DashboardSnapshot, FilterPredicate, IndexDetail, IndexView, QuadrantsView,
    StatisticsView,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use core_types::{Category, SortKey};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

/// The success envelope every endpoint returns.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<SortKey>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            count: None,
            metric: None,
        })
    }
}

impl<T> ApiResponse<Vec<T>> {
    fn list(data: Vec<T>) -> Json<Self> {
        Json(Self {
            success: true,
            count: Some(data.len()),
            data,
            metric: None,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TopPerformersParams {
    metric: Option<String>,
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    indices: Vec<String>,
}

/// # GET /api/health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// # GET /api/indices
pub async fn get_indices(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<IndexView>>> {
    ApiResponse::list(state.dashboard.indices())
}

/// # POST /api/indices/filter
/// Body: `{search?, category?, maxRisk?, minReturn?}`.
pub async fn filter_indices(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FilterPredicate>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<IndexView>>>, AppError> {
    let Json(predicate) = payload?;
    let records = state.dashboard.filter(&predicate)?;
    Ok(ApiResponse::list(IndexView::list(&records, state.dashboard.engine())))
}

/// # GET /api/statistics
/// Accepts the filter fields as query parameters; without them covers the whole dataset.
pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FilterPredicate>, QueryRejection>,
) -> Result<Json<ApiResponse<StatisticsView>>, AppError> {
    let Query(predicate) = query?;
    let stats = state.dashboard.statistics(&predicate)?;
    Ok(ApiResponse::ok(StatisticsView::from(&stats)))
}

/// # GET /api/quadrants
pub async fn get_quadrants(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FilterPredicate>, QueryRejection>,
) -> Result<Json<ApiResponse<QuadrantsView>>, AppError> {
    let Query(predicate) = query?;
    let quadrants = state.dashboard.quadrants(&predicate)?;
    Ok(ApiResponse::ok(quadrants))
}

/// # GET /api/top-performers?metric=returns|sharpe|low_risk&limit=10
pub async fn get_top_performers(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TopPerformersParams>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<IndexView>>>, AppError> {
    let Query(params) = query?;
    let metric = match params.metric.as_deref() {
        Some(raw) => raw.parse::<SortKey>().map_err(analyzer::AnalyzerError::from)?,
        None => SortKey::Returns,
    };

    let records = state.dashboard.top(metric, params.limit);
    let Json(mut response) = ApiResponse::list(IndexView::list(&records, state.dashboard.engine()));
    response.metric = Some(metric);
    Ok(Json(response))
}

/// # GET /api/index/:name
pub async fn get_index_details(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<IndexDetail>>, AppError> {
    let detail = state.dashboard.detail(&name)?;
    Ok(ApiResponse::ok(detail))
}

/// # POST /api/compare
/// Body: `{indices: [name, ...]}`.
pub async fn compare_indices(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<IndexView>>>, AppError> {
    let Json(request) = payload?;
    let records = state.dashboard.compare(&request.indices)?;
    Ok(ApiResponse::list(IndexView::list(&records, state.dashboard.engine())))
}

/// # GET /api/categories
pub async fn get_categories(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<Category>>> {
    ApiResponse::list(state.dashboard.categories())
}

/// # POST /api/dashboard
/// Body: the filter fields plus `sort`. Returns the whole snapshot in one round trip.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DashboardQuery>, JsonRejection>,
) -> Result<Json<ApiResponse<DashboardSnapshot>>, AppError> {
    let Json(query) = payload?;
    let snapshot = state.dashboard.snapshot(&query)?;
    Ok(ApiResponse::ok(snapshot))
}
