use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::Reading;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Clone)]
pub struct ReadingRepository {
    pool: DbPool,
}

impl ReadingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Reading>> {
        let readings = sqlx::query_as::<_, Reading>(
            "SELECT id, date, value FROM readings ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }

    pub async fn insert(&self, reading: &Reading) -> Result<()> {
        sqlx::query("INSERT INTO readings (id, date, value) VALUES ($1, $2, $3)")
            .bind(reading.id)
            .bind(reading.date)
            .bind(reading.value)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_unique_violation(e, reading.date))?;

        Ok(())
    }

    pub async fn update(&self, id: Uuid, date: NaiveDate, value: f64) -> Result<()> {
        let result = sqlx::query("UPDATE readings SET date = $1, value = $2 WHERE id = $3")
            .bind(date)
            .bind(value)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_unique_violation(e, date))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Reading {} not found", id)));
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM readings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Reading {} not found", id)));
        }

        Ok(())
    }

    /// All-or-nothing bulk upsert; an existing date keeps its id and
    /// takes the incoming value.
    pub async fn upsert_many(&self, readings: &[Reading]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for reading in readings {
            sqlx::query(
                "INSERT INTO readings (id, date, value) VALUES ($1, $2, $3)
                 ON CONFLICT (date) DO UPDATE SET value = EXCLUDED.value",
            )
            .bind(reading.id)
            .bind(reading.date)
            .bind(reading.value)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// A unique violation here means a concurrent writer won the date
    /// between validation and insert; surface it as a conflict rather
    /// than a generic store failure.
    fn map_unique_violation(e: sqlx::Error, date: NaiveDate) -> AppError {
        match &e {
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                AppError::Conflict(format!("A reading for {} already exists", date))
            }
            _ => AppError::Db(e),
        }
    }
}
