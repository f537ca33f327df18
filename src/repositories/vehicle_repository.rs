use sqlx::SqlitePool;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: &Vehicle) -> AppResult<Vehicle> {
        let created = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                plate_number, chasis, vehicle_type, make, model, year,
                fuel_type, fuel_capacity, fuel_consumption, loading_capacity, assigned_for
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            RETURNING *
            "#,
        )
        .bind(&vehicle.plate_number)
        .bind(&vehicle.chasis)
        .bind(vehicle.vehicle_type)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(&vehicle.year)
        .bind(vehicle.fuel_type)
        .bind(vehicle.fuel_capacity)
        .bind(vehicle.fuel_consumption)
        .bind(&vehicle.loading_capacity)
        .bind(vehicle.assigned_for)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_plate(&self, plate_number: &str) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE plate_number = ?1",
        )
        .bind(plate_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles ORDER BY plate_number",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn update(&self, vehicle: &Vehicle) -> AppResult<Option<Vehicle>> {
        let updated = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET chasis = ?2, vehicle_type = ?3, make = ?4, model = ?5, year = ?6,
                fuel_type = ?7, fuel_capacity = ?8, fuel_consumption = ?9,
                loading_capacity = ?10, assigned_for = ?11
            WHERE plate_number = ?1
            RETURNING *
            "#,
        )
        .bind(&vehicle.plate_number)
        .bind(&vehicle.chasis)
        .bind(vehicle.vehicle_type)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(&vehicle.year)
        .bind(vehicle.fuel_type)
        .bind(vehicle.fuel_capacity)
        .bind(vehicle.fuel_consumption)
        .bind(&vehicle.loading_capacity)
        .bind(vehicle.assigned_for)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, plate_number: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE plate_number = ?1")
            .bind(plate_number)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn plate_exists(&self, plate_number: &str) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate_number = ?1)",
        )
        .bind(plate_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn chasis_exists(&self, chasis: &str, exclude_plate: Option<&str>) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM vehicles
                WHERE chasis = ?1 AND (?2 IS NULL OR plate_number <> ?2)
            )
            "#,
        )
        .bind(chasis)
        .bind(exclude_plate)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}
