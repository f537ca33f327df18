use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::assignment::Assignment;
use crate::utils::errors::AppResult;

pub struct AssignmentRepository {
    pool: SqlitePool,
}

impl AssignmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        plate_number: &str,
        driver_id: i64,
        work_place: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        gps_position: &str,
        geofence_violations: i64,
    ) -> AppResult<Assignment> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (
                plate_number, driver_id, work_place, start_date,
                end_date, gps_position, geofence_violations
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING *
            "#,
        )
        .bind(plate_number)
        .bind(driver_id)
        .bind(work_place)
        .bind(start_date)
        .bind(end_date)
        .bind(gps_position)
        .bind(geofence_violations)
        .fetch_one(&self.pool)
        .await?;

        Ok(assignment)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Assignment>> {
        let assignment = sqlx::query_as::<_, Assignment>("SELECT * FROM assignments WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(assignment)
    }

    pub async fn list(&self) -> AppResult<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, Assignment>("SELECT * FROM assignments ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(assignments)
    }

    pub async fn list_by_vehicle(&self, plate_number: &str) -> AppResult<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE plate_number = ?1 ORDER BY id",
        )
        .bind(plate_number)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    pub async fn list_by_driver(&self, driver_id: i64) -> AppResult<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE driver_id = ?1 ORDER BY id",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i64,
        plate_number: &str,
        driver_id: i64,
        work_place: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        gps_position: &str,
        geofence_violations: i64,
    ) -> AppResult<Option<Assignment>> {
        let updated = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignments
            SET plate_number = ?2, driver_id = ?3, work_place = ?4, start_date = ?5,
                end_date = ?6, gps_position = ?7, geofence_violations = ?8
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(plate_number)
        .bind(driver_id)
        .bind(work_place)
        .bind(start_date)
        .bind(end_date)
        .bind(gps_position)
        .bind(geofence_violations)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM assignments WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
