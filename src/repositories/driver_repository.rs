use sqlx::SqlitePool;

use crate::models::driver::Driver;
use crate::utils::errors::AppResult;

pub struct DriverRepository {
    pool: SqlitePool,
}

impl DriverRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        id_number: &str,
        phone: &str,
        reporting_to: &str,
    ) -> AppResult<Driver> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (name, id_number, phone, reporting_to)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(id_number)
        .bind(phone)
        .bind(reporting_to)
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Driver>> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn find_by_id_number(&self, id_number: &str) -> AppResult<Option<Driver>> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id_number = ?1")
            .bind(id_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    /// Primera coincidencia por fragmento de nombre, sin distinguir
    /// mayúsculas, en orden de id
    pub async fn find_by_name_fragment(&self, fragment: &str) -> AppResult<Option<Driver>> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            SELECT * FROM drivers
            WHERE name LIKE '%' || ?1 || '%'
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(fragment)
        .fetch_optional(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn list(&self) -> AppResult<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(drivers)
    }

    pub async fn update(&self, driver: &Driver) -> AppResult<Option<Driver>> {
        let updated = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET name = ?2, id_number = ?3, phone = ?4, reporting_to = ?5
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(driver.id)
        .bind(&driver.name)
        .bind(&driver.id_number)
        .bind(&driver.phone)
        .bind(&driver.reporting_to)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn id_number_exists(
        &self,
        id_number: &str,
        exclude_id: Option<i64>,
    ) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM drivers
                WHERE id_number = ?1 AND (?2 IS NULL OR id <> ?2)
            )
            "#,
        )
        .bind(id_number)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM drivers")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}
