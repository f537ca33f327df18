use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::maintenance::{Maintenance, MaintenanceCenter};
use crate::utils::errors::AppResult;

pub struct MaintenanceRepository {
    pool: SqlitePool,
}

impl MaintenanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        plate_number: &str,
        last_service_km: i64,
        last_service_date: NaiveDate,
        next_service_km: i64,
        next_service_date: NaiveDate,
        maintenance_center: MaintenanceCenter,
    ) -> AppResult<Maintenance> {
        let record = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenance (
                plate_number, last_service_km, last_service_date,
                next_service_km, next_service_date, maintenance_center
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING *
            "#,
        )
        .bind(plate_number)
        .bind(last_service_km)
        .bind(last_service_date)
        .bind(next_service_km)
        .bind(next_service_date)
        .bind(maintenance_center)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Maintenance>> {
        let record = sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenance WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn list(&self) -> AppResult<Vec<Maintenance>> {
        let records = sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenance ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    pub async fn list_by_vehicle(&self, plate_number: &str) -> AppResult<Vec<Maintenance>> {
        let records = sqlx::query_as::<_, Maintenance>(
            "SELECT * FROM maintenance WHERE plate_number = ?1 ORDER BY id",
        )
        .bind(plate_number)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM maintenance WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
