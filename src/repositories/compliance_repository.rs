use sqlx::SqlitePool;

use crate::models::compliance::Compliance;
use crate::utils::errors::AppResult;

pub struct ComplianceRepository {
    pool: SqlitePool,
}

impl ComplianceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_plate(&self, plate_number: &str) -> AppResult<Option<Compliance>> {
        let compliance = sqlx::query_as::<_, Compliance>(
            "SELECT * FROM compliance WHERE plate_number = ?1",
        )
        .bind(plate_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(compliance)
    }

    pub async fn list(&self) -> AppResult<Vec<Compliance>> {
        let rows = sqlx::query_as::<_, Compliance>(
            "SELECT * FROM compliance ORDER BY plate_number",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserta o reemplaza el registro del vehículo en una sola sentencia;
    /// la clave primaria garantiza como máximo una fila por placa.
    pub async fn upsert(&self, compliance: &Compliance) -> AppResult<Compliance> {
        let saved = sqlx::query_as::<_, Compliance>(
            r#"
            INSERT INTO compliance (
                plate_number, insurance_type, insurance_date, yearly_inspection,
                inspection_date, safety_audit, utilization_history, accident_history
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(plate_number) DO UPDATE SET
                insurance_type = excluded.insurance_type,
                insurance_date = excluded.insurance_date,
                yearly_inspection = excluded.yearly_inspection,
                inspection_date = excluded.inspection_date,
                safety_audit = excluded.safety_audit,
                utilization_history = excluded.utilization_history,
                accident_history = excluded.accident_history
            RETURNING *
            "#,
        )
        .bind(&compliance.plate_number)
        .bind(compliance.insurance_type)
        .bind(compliance.insurance_date)
        .bind(compliance.yearly_inspection)
        .bind(compliance.inspection_date)
        .bind(compliance.safety_audit)
        .bind(&compliance.utilization_history)
        .bind(&compliance.accident_history)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}
