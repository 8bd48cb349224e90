use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{ChartPoint, DashboardResponse, InsightResponse, Period, VariationPoint};
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct DashboardParams {
    as_of: Option<NaiveDate>,
    cost_per_kwh: Option<f64>,
}

#[derive(Deserialize)]
pub struct ChartParams {
    period: Period,
}

#[derive(Deserialize)]
pub struct InsightParams {
    as_of: Option<NaiveDate>,
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardResponse>> {
    let as_of = params.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let cost_per_kwh = params
        .cost_per_kwh
        .unwrap_or(state.config.billing.cost_per_kwh);

    let metrics = state.service.metrics(as_of).await?;
    let estimated_cost = metrics.monthly_total * cost_per_kwh;

    Ok(Json(DashboardResponse {
        metrics,
        cost_per_kwh,
        estimated_cost,
    }))
}

pub async fn get_charts(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> Result<Json<Vec<ChartPoint>>> {
    let points = state.service.chart_data(params.period).await?;
    Ok(Json(points))
}

pub async fn get_variation(
    State(state): State<AppState>,
) -> Result<Json<Vec<VariationPoint>>> {
    let points = state.service.daily_variation().await?;
    Ok(Json(points))
}

pub async fn get_insight(
    State(state): State<AppState>,
    Query(params): Query<InsightParams>,
) -> Result<Json<InsightResponse>> {
    let as_of = params.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let averages = state.service.weekly_averages(as_of).await?;
    let insight = state.insight.consumption_insight(&averages).await;

    Ok(Json(InsightResponse { insight }))
}
