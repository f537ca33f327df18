//! Filas y agregados de los reportes
//!
//! Cada reporte es una secuencia ordenada de filas con campos nombrados;
//! el renderizado (HTML, hoja de cálculo) es responsabilidad del consumidor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dto::assignment_dto::AssignmentResponse;
use crate::dto::compliance_dto::ComplianceResponse;
use crate::dto::driver_dto::DriverResponse;
use crate::dto::maintenance_dto::MaintenanceResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::maintenance::MaintenanceCenter;

/// Conteo de vehículos por categoría de asignación
#[derive(Debug, Serialize)]
pub struct AssignedForCount {
    pub assigned_for: String,
    pub vehicle_count: i64,
}

/// Reporte resumen de asignaciones
#[derive(Debug, Serialize)]
pub struct AssignmentSummaryReport {
    pub assignment_counts: Vec<AssignedForCount>,
    pub ongoing_assignments: i64,
    pub unassigned_vehicles: i64,
}

/// Fila del roster de conductores: un conductor y, como máximo, una
/// asignación activa. Sin asignación se rellenan los placeholders.
#[derive(Debug, Serialize)]
pub struct DriverRosterRow {
    pub driver_name: String,
    pub id_number: String,
    pub phone: String,
    pub assigned_vehicle: String,
    pub work_place: String,
    pub start_date: String,
    pub end_date: String,
}

/// Fila de mantenimiento próximo para el dashboard
#[derive(Debug, Serialize)]
pub struct MaintenanceDueRow {
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub next_service_date: NaiveDate,
    pub maintenance_center: MaintenanceCenter,
}

/// Fila de problema de compliance para el dashboard
#[derive(Debug, Serialize)]
pub struct ComplianceIssueRow {
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub issue_type: String,
}

/// Conteos y listas top-N del dashboard
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub vehicle_count: i64,
    pub driver_count: i64,
    pub active_assignment_count: i64,
    pub maintenance_due: Vec<MaintenanceDueRow>,
    pub compliance_issues: Vec<ComplianceIssueRow>,
}

/// Reporte individual de un vehículo con sus registros dependientes,
/// resueltos por búsquedas de clave foránea (sin navegación implícita)
#[derive(Debug, Serialize)]
pub struct VehicleReport {
    pub vehicle: VehicleResponse,
    pub compliance: Option<ComplianceResponse>,
    pub maintenance: Vec<MaintenanceResponse>,
    pub assignments: Vec<AssignmentResponse>,
}

/// Reporte individual de un conductor con sus asignaciones
#[derive(Debug, Serialize)]
pub struct DriverReport {
    pub driver: DriverResponse,
    pub assignments: Vec<AssignmentResponse>,
}

/// Query params comunes de los reportes; sin as_of se usa la fecha actual
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub as_of: Option<String>,
}

/// Query params del dashboard; la ventana y el top-N son parámetros,
/// los defaults los pone el consumidor
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub as_of: Option<String>,
    pub window_days: Option<i64>,
    pub limit: Option<usize>,
}

/// Búsqueda de reporte individual de conductor
#[derive(Debug, Deserialize)]
pub struct DriverLookupParams {
    pub id_number: Option<String>,
    pub name: Option<String>,
}
