use crate::analysis;
use crate::error::{AppError, Result};
use crate::models::{
    AnalysisMetrics, ChartPoint, ConsumptionReading, ImportedReading, Period, Reading,
    VariationPoint, WeeklyAverages,
};
use crate::repositories::ReadingRepository;
use crate::validation::validate_write;
use chrono::NaiveDate;
use uuid::Uuid;

/// Orchestrates the read path (store -> deriver -> aggregator/bucketer)
/// and the write path (validation gate -> store). Derived values are
/// recomputed from a full scan on every call.
#[derive(Clone)]
pub struct ReadingService {
    repository: ReadingRepository,
}

impl ReadingService {
    pub fn new(repository: ReadingRepository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Reading>> {
        self.repository.find_all().await
    }

    pub async fn consumption(&self) -> Result<Vec<ConsumptionReading>> {
        let readings = self.repository.find_all().await?;
        Ok(analysis::derive_consumption(&readings))
    }

    pub async fn metrics(&self, as_of: NaiveDate) -> Result<AnalysisMetrics> {
        let readings = self.consumption().await?;
        Ok(analysis::analysis_metrics(&readings, as_of))
    }

    pub async fn chart_data(&self, period: Period) -> Result<Vec<ChartPoint>> {
        let readings = self.consumption().await?;
        Ok(analysis::chart_data(&readings, period))
    }

    pub async fn daily_variation(&self) -> Result<Vec<VariationPoint>> {
        let readings = self.consumption().await?;
        Ok(analysis::daily_variation(&readings))
    }

    pub async fn weekly_averages(&self, as_of: NaiveDate) -> Result<WeeklyAverages> {
        let readings = self.consumption().await?;
        Ok(analysis::weekly_averages(&readings, as_of))
    }

    pub async fn create(&self, date: NaiveDate, value: f64) -> Result<Reading> {
        let existing = self.repository.find_all().await?;
        validate_write(date, value, &existing, None)?;

        let reading = Reading {
            id: Uuid::new_v4(),
            date,
            value,
        };
        self.repository.insert(&reading).await?;

        Ok(reading)
    }

    pub async fn update(&self, id: Uuid, date: NaiveDate, value: f64) -> Result<Reading> {
        let existing = self.repository.find_all().await?;
        validate_write(date, value, &existing, Some(id))?;

        self.repository.update(id, date, value).await?;

        Ok(Reading { id, date, value })
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repository.delete(id).await
    }

    /// Bulk upsert, id-preserving where the caller supplies one.
    /// Restores a full history in one transaction and does not go
    /// through the per-write validation gate.
    pub async fn import(&self, items: Vec<ImportedReading>) -> Result<usize> {
        if items.is_empty() {
            return Err(AppError::Validation(
                "No valid readings to import".to_string(),
            ));
        }

        let readings: Vec<Reading> = items
            .into_iter()
            .map(|item| Reading {
                id: item.id.unwrap_or_else(Uuid::new_v4),
                date: item.date,
                value: item.value,
            })
            .collect();

        self.repository.upsert_many(&readings).await?;
        Ok(readings.len())
    }
}
