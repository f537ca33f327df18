//! Configuración de conexión a SQLite
//!
//! Este módulo crea el pool de conexiones y aplica el schema. El pool es
//! el handle de store que se pasa por request; no hay sesión global.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(database_url: Option<&str>) -> Result<SqlitePool> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:fleet.db".to_string()),
    };

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);

    // Una base :memory: vive dentro de una única conexión; con más de una
    // cada conexión del pool vería una base distinta.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Aplicar el schema de la base de datos
///
/// Sin claves foráneas declaradas: borrar un vehículo o un conductor deja
/// sus asignaciones huérfanas, igual que el sistema original.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS vehicles (
            plate_number TEXT PRIMARY KEY,
            chasis TEXT NOT NULL UNIQUE,
            vehicle_type TEXT NOT NULL,
            make TEXT NOT NULL,
            model TEXT NOT NULL,
            year TEXT NOT NULL,
            fuel_type TEXT NOT NULL,
            fuel_capacity REAL NOT NULL DEFAULT 0,
            fuel_consumption REAL NOT NULL DEFAULT 0,
            loading_capacity TEXT NOT NULL DEFAULT '',
            assigned_for TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS drivers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            id_number TEXT NOT NULL UNIQUE,
            phone TEXT NOT NULL DEFAULT '',
            reporting_to TEXT NOT NULL DEFAULT ''
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS compliance (
            plate_number TEXT PRIMARY KEY,
            insurance_type TEXT NOT NULL,
            insurance_date TEXT NULL,
            yearly_inspection TEXT NOT NULL,
            inspection_date TEXT NULL,
            safety_audit TEXT NOT NULL,
            utilization_history TEXT NOT NULL DEFAULT '',
            accident_history TEXT NOT NULL DEFAULT ''
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS maintenance (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            plate_number TEXT NOT NULL,
            last_service_km INTEGER NOT NULL,
            last_service_date TEXT NOT NULL,
            next_service_km INTEGER NOT NULL,
            next_service_date TEXT NOT NULL,
            maintenance_center TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS assignments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            plate_number TEXT NOT NULL,
            driver_id INTEGER NOT NULL,
            work_place TEXT NOT NULL DEFAULT '',
            start_date TEXT NOT NULL,
            end_date TEXT NULL,
            gps_position TEXT NOT NULL DEFAULT '',
            geofence_violations INTEGER NOT NULL DEFAULT 0
        )
        "#,
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
