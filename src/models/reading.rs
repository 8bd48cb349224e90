use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single cumulative meter observation. At most one per calendar date,
/// enforced by the unique constraint on `date`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reading {
    pub id: Uuid,
    pub date: NaiveDate,
    pub value: f64,
}

/// A reading annotated with the usage since its chronological
/// predecessor. Recomputed on every read, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionReading {
    pub id: Uuid,
    pub date: NaiveDate,
    pub value: f64,
    pub consumption: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakDay {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    pub daily_average: f64,
    pub weekly_total: f64,
    pub monthly_total: f64,
    pub peak_consumption_day: Option<PeakDay>,
    pub total_units_month: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub consumption: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationPoint {
    pub date: String,
    pub variation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

/// Average daily consumption for the current and previous ISO week,
/// the payload handed to the insight generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAverages {
    pub current_week_consumption: f64,
    pub previous_week_consumption: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReadingRequest {
    pub date: NaiveDate,
    pub value: f64,
    pub secret_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReadingRequest {
    pub date: NaiveDate,
    pub value: f64,
    pub secret_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportedReading {
    pub id: Option<Uuid>,
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportReadingsRequest {
    pub readings: Vec<ImportedReading>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportReadingsResponse {
    pub imported: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub metrics: AnalysisMetrics,
    pub cost_per_kwh: f64,
    pub estimated_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightResponse {
    pub insight: String,
}
