//! Agregación de reportes
//!
//! Este módulo combina los scans de entidades con los hechos derivados
//! para armar los resultados tabulares nombrados. Cada reporte se
//! recalcula en cada request; no hay cache, así que toda mutación ya
//! confirmada se refleja en el siguiente reporte.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::collections::{BTreeMap, HashMap};

use crate::dto::report_dto::{
    AssignedForCount, AssignmentSummaryReport, ComplianceIssueRow, DashboardReport, DriverReport,
    DriverRosterRow, MaintenanceDueRow, VehicleReport,
};
use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::vehicle::Vehicle;
use crate::repositories::assignment_repository::AssignmentRepository;
use crate::repositories::compliance_repository::ComplianceRepository;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::status_service;
use crate::utils::errors::{not_found_error, AppResult};

pub struct ReportService {
    vehicles: VehicleRepository,
    drivers: DriverRepository,
    compliance: ComplianceRepository,
    maintenance: MaintenanceRepository,
    assignments: AssignmentRepository,
}

impl ReportService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            compliance: ComplianceRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool),
        }
    }

    /// Conteo de vehículos por categoría más los dos escalares del resumen
    pub async fn assignment_summary(&self, as_of: NaiveDate) -> AppResult<AssignmentSummaryReport> {
        let vehicles = self.vehicles.list().await?;
        let assignments = self.assignments.list().await?;

        // BTreeMap para un orden estable por categoría
        let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
        for vehicle in &vehicles {
            *counts.entry(vehicle.assigned_for.as_str()).or_insert(0) += 1;
        }
        let assignment_counts = counts
            .into_iter()
            .map(|(assigned_for, vehicle_count)| AssignedForCount {
                assigned_for: assigned_for.to_string(),
                vehicle_count,
            })
            .collect();

        let ongoing_assignments =
            status_service::active_assignments(&assignments, as_of).len() as i64;
        let unassigned_vehicles =
            status_service::unassigned_vehicles(&vehicles, &assignments, as_of).len() as i64;

        Ok(AssignmentSummaryReport {
            assignment_counts,
            ongoing_assignments,
            unassigned_vehicles,
        })
    }

    /// Fila completa de atributos por cada vehículo sin asignación activa
    pub async fn unassigned_vehicles(&self, as_of: NaiveDate) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.vehicles.list().await?;
        let assignments = self.assignments.list().await?;

        let rows = status_service::unassigned_vehicles(&vehicles, &assignments, as_of)
            .into_iter()
            .cloned()
            .map(VehicleResponse::from)
            .collect();

        Ok(rows)
    }

    /// Roster: una fila por conductor, unida a lo sumo a una asignación
    /// activa. Con varias activas gana la de menor id; sin ninguna se
    /// rellenan los placeholders.
    pub async fn driver_roster(&self, as_of: NaiveDate) -> AppResult<Vec<DriverRosterRow>> {
        let drivers = self.drivers.list().await?;
        let assignments = self.assignments.list().await?;
        let vehicles = self.vehicles.list().await?;

        let vehicle_by_plate: HashMap<&str, &Vehicle> = vehicles
            .iter()
            .map(|v| (v.plate_number.as_str(), v))
            .collect();
        let active = status_service::active_assignments(&assignments, as_of);

        let rows = drivers
            .iter()
            .map(|driver| {
                let joined = active
                    .iter()
                    .filter(|a| a.driver_id == driver.id)
                    .min_by_key(|a| a.id);

                match joined {
                    Some(assignment) => {
                        let assigned_vehicle =
                            match vehicle_by_plate.get(assignment.plate_number.as_str()) {
                                Some(vehicle) => {
                                    format!("{} ({})", vehicle.plate_number, vehicle.make)
                                }
                                // Asignación huérfana: el vehículo fue borrado
                                None => assignment.plate_number.clone(),
                            };
                        DriverRosterRow {
                            driver_name: driver.name.clone(),
                            id_number: driver.id_number.clone(),
                            phone: driver.phone.clone(),
                            assigned_vehicle,
                            work_place: assignment.work_place.clone(),
                            start_date: assignment.start_date.format("%Y-%m-%d").to_string(),
                            end_date: assignment
                                .end_date
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_else(|| "-".to_string()),
                        }
                    }
                    None => DriverRosterRow {
                        driver_name: driver.name.clone(),
                        id_number: driver.id_number.clone(),
                        phone: driver.phone.clone(),
                        assigned_vehicle: "Not assigned".to_string(),
                        work_place: "-".to_string(),
                        start_date: "-".to_string(),
                        end_date: "-".to_string(),
                    },
                }
            })
            .collect();

        Ok(rows)
    }

    /// Conteos totales más las listas top-N de mantenimiento y compliance
    pub async fn dashboard(
        &self,
        as_of: NaiveDate,
        window_days: i64,
        limit: usize,
    ) -> AppResult<DashboardReport> {
        let vehicle_count = self.vehicles.count().await?;
        let driver_count = self.drivers.count().await?;

        let assignments = self.assignments.list().await?;
        let active_assignment_count =
            status_service::active_assignments(&assignments, as_of).len() as i64;

        let vehicles = self.vehicles.list().await?;
        let vehicle_by_plate: HashMap<&str, &Vehicle> = vehicles
            .iter()
            .map(|v| (v.plate_number.as_str(), v))
            .collect();

        let maintenance = self.maintenance.list().await?;
        let maintenance_due = status_service::maintenance_due(&maintenance, as_of, window_days, limit)
            .into_iter()
            .filter_map(|record| {
                // Join interno con el vehículo; un registro huérfano no sale
                vehicle_by_plate
                    .get(record.plate_number.as_str())
                    .map(|vehicle| MaintenanceDueRow {
                        plate_number: record.plate_number.clone(),
                        make: vehicle.make.clone(),
                        model: vehicle.model.clone(),
                        next_service_date: record.next_service_date,
                        maintenance_center: record.maintenance_center,
                    })
            })
            .collect();

        let compliance = self.compliance.list().await?;
        let compliance_issues = status_service::compliance_issues(&compliance, as_of, limit)
            .into_iter()
            .filter_map(|(row, issue)| {
                vehicle_by_plate
                    .get(row.plate_number.as_str())
                    .map(|vehicle| ComplianceIssueRow {
                        plate_number: row.plate_number.clone(),
                        make: vehicle.make.clone(),
                        model: vehicle.model.clone(),
                        issue_type: issue.to_string(),
                    })
            })
            .collect();

        Ok(DashboardReport {
            vehicle_count,
            driver_count,
            active_assignment_count,
            maintenance_due,
            compliance_issues,
        })
    }

    /// Reporte individual de un vehículo: sus dependientes se resuelven
    /// con búsquedas explícitas por clave foránea
    pub async fn vehicle_report(&self, plate_number: &str) -> AppResult<VehicleReport> {
        let vehicle = self
            .vehicles
            .find_by_plate(plate_number)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", plate_number))?;

        let compliance = self.compliance.find_by_plate(plate_number).await?;
        let maintenance = self.maintenance.list_by_vehicle(plate_number).await?;
        let assignments = self.assignments.list_by_vehicle(plate_number).await?;

        Ok(VehicleReport {
            vehicle: vehicle.into(),
            compliance: compliance.map(Into::into),
            maintenance: maintenance.into_iter().map(Into::into).collect(),
            assignments: assignments.into_iter().map(Into::into).collect(),
        })
    }

    /// Reporte individual de un conductor por número de documento exacto
    pub async fn driver_report_by_id_number(&self, id_number: &str) -> AppResult<DriverReport> {
        let driver = self
            .drivers
            .find_by_id_number(id_number)
            .await?
            .ok_or_else(|| not_found_error("Driver", id_number))?;

        self.driver_report(driver).await
    }

    /// Reporte individual de un conductor por fragmento de nombre
    pub async fn driver_report_by_name(&self, fragment: &str) -> AppResult<DriverReport> {
        let driver = self
            .drivers
            .find_by_name_fragment(fragment)
            .await?
            .ok_or_else(|| not_found_error("Driver", fragment))?;

        self.driver_report(driver).await
    }

    async fn driver_report(&self, driver: crate::models::driver::Driver) -> AppResult<DriverReport> {
        let assignments = self.assignments.list_by_driver(driver.id).await?;

        Ok(DriverReport {
            driver: driver.into(),
            assignments: assignments.into_iter().map(Into::into).collect(),
        })
    }
}
