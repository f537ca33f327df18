//! Tests de integración sobre un store SQLite en memoria: reglas de
//! validación de los controllers y reportes agregados de punta a punta.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use fleet_management::controllers::assignment_controller::AssignmentController;
use fleet_management::controllers::compliance_controller::ComplianceController;
use fleet_management::controllers::driver_controller::DriverController;
use fleet_management::controllers::maintenance_controller::MaintenanceController;
use fleet_management::controllers::vehicle_controller::VehicleController;
use fleet_management::database::{create_pool, run_migrations};
use fleet_management::dto::assignment_dto::CreateAssignmentRequest;
use fleet_management::dto::compliance_dto::UpsertComplianceRequest;
use fleet_management::dto::driver_dto::CreateDriverRequest;
use fleet_management::dto::maintenance_dto::CreateMaintenanceRequest;
use fleet_management::dto::vehicle_dto::CreateVehicleRequest;
use fleet_management::services::report_service::ReportService;
use fleet_management::utils::errors::AppError;

async fn setup_pool() -> SqlitePool {
    let pool = create_pool(Some("sqlite::memory:")).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn vehicle_request(plate: &str, chasis: &str) -> CreateVehicleRequest {
    CreateVehicleRequest {
        plate_number: plate.to_string(),
        chasis: chasis.to_string(),
        vehicle_type: "Pickup".to_string(),
        make: "Toyota".to_string(),
        model: "Hilux".to_string(),
        year: "2020".to_string(),
        fuel_type: "Diesel".to_string(),
        fuel_capacity: Some(80.0),
        fuel_consumption: Some(9.5),
        loading_capacity: Some("1 ton".to_string()),
        assigned_for: "Project".to_string(),
    }
}

fn driver_request(name: &str, id_number: &str) -> CreateDriverRequest {
    CreateDriverRequest {
        name: name.to_string(),
        id_number: id_number.to_string(),
        phone: Some("0911223344".to_string()),
        reporting_to: Some("Fleet Manager".to_string()),
    }
}

fn assignment_request(
    plate: &str,
    driver_id: i64,
    start_date: &str,
    end_date: Option<&str>,
) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        plate_number: plate.to_string(),
        driver_id,
        work_place: Some("Field office".to_string()),
        start_date: start_date.to_string(),
        end_date: end_date.map(str::to_string),
        gps_position: Some("9.0054,38.7636".to_string()),
        geofence_violations: Some(0),
    }
}

fn compliance_request(yearly_inspection: &str) -> UpsertComplianceRequest {
    UpsertComplianceRequest {
        insurance_type: "Fully Insured".to_string(),
        insurance_date: Some("2025-05-01".to_string()),
        yearly_inspection: yearly_inspection.to_string(),
        inspection_date: Some("2025-05-01".to_string()),
        safety_audit: "Safe".to_string(),
        utilization_history: None,
        accident_history: None,
    }
}

#[tokio::test]
async fn test_vehicle_round_trip_normalizes_plate() {
    let pool = setup_pool().await;
    let controller = VehicleController::new(pool.clone());

    let created = controller
        .create(vehicle_request("  aa1234b ", "CH-001"))
        .await
        .unwrap();
    let created = created.data.unwrap();
    assert_eq!(created.plate_number, "AA1234B");

    let fetched = controller.get_by_plate("AA1234B").await.unwrap();
    assert_eq!(fetched.plate_number, "AA1234B");
    assert_eq!(fetched.chasis, "CH-001");
    assert_eq!(fetched.make, "Toyota");
    assert_eq!(fetched.model, "Hilux");
    assert_eq!(fetched.year, "2020");
    assert_eq!(fetched.fuel_capacity, 80.0);
    assert_eq!(fetched.fuel_consumption, 9.5);
    assert_eq!(fetched.loading_capacity, "1 ton");
}

#[tokio::test]
async fn test_vehicle_duplicate_plate_and_chasis_are_rejected() {
    let pool = setup_pool().await;
    let controller = VehicleController::new(pool.clone());

    controller
        .create(vehicle_request("AA1234B", "CH-001"))
        .await
        .unwrap();

    // Misma placa (tras normalizar), distinto chasis
    let err = controller
        .create(vehicle_request("aa1234b", "CH-002"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(_)));

    // Distinta placa, mismo chasis
    let err = controller
        .create(vehicle_request("BB5678C", "CH-001"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(_)));

    assert_eq!(controller.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_vehicle_with_unknown_option_is_rejected() {
    let pool = setup_pool().await;
    let controller = VehicleController::new(pool.clone());

    let mut request = vehicle_request("AA1234B", "CH-001");
    request.fuel_type = "Kerosene".to_string();

    let err = controller.create(request).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidFormat(_)));
    assert!(controller.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_driver_duplicate_id_number_leaves_existing_row_unchanged() {
    let pool = setup_pool().await;
    let controller = DriverController::new(pool.clone());

    let first = controller
        .create(driver_request("Abebe Bekele", "ID-100"))
        .await
        .unwrap()
        .data
        .unwrap();

    let err = controller
        .create(driver_request("Someone Else", "ID-100"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(_)));

    let drivers = controller.list().await.unwrap();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].id, first.id);
    assert_eq!(drivers[0].name, "Abebe Bekele");
}

#[tokio::test]
async fn test_assignment_end_before_start_is_rejected_without_writing() {
    let pool = setup_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let drivers = DriverController::new(pool.clone());
    let assignments = AssignmentController::new(pool.clone());

    vehicles
        .create(vehicle_request("AA1234B", "CH-001"))
        .await
        .unwrap();
    let driver = drivers
        .create(driver_request("Abebe Bekele", "ID-100"))
        .await
        .unwrap()
        .data
        .unwrap();

    let err = assignments
        .create(assignment_request(
            "AA1234B",
            driver.id,
            "2024-06-01",
            Some("2024-01-01"),
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));
    assert!(assignments.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_assignment_requires_existing_vehicle_and_driver() {
    let pool = setup_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let drivers = DriverController::new(pool.clone());
    let assignments = AssignmentController::new(pool.clone());

    let err = assignments
        .create(assignment_request("ZZ0000Z", 1, "2024-01-01", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ReferentialError(_)));

    vehicles
        .create(vehicle_request("AA1234B", "CH-001"))
        .await
        .unwrap();
    let err = assignments
        .create(assignment_request("AA1234B", 99, "2024-01-01", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ReferentialError(_)));

    drivers
        .create(driver_request("Abebe Bekele", "ID-100"))
        .await
        .unwrap();
    let err = assignments
        .create(assignment_request("AA1234B", 1, "01/06/2024", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidFormat(_)));

    assert!(assignments.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_open_ended_assignment_keeps_vehicle_out_of_unassigned_report() {
    let pool = setup_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let drivers = DriverController::new(pool.clone());
    let assignments = AssignmentController::new(pool.clone());
    let reports = ReportService::new(pool.clone());

    vehicles
        .create(vehicle_request("BB5678C", "CH-002"))
        .await
        .unwrap();
    vehicles
        .create(vehicle_request("AA1234B", "CH-001"))
        .await
        .unwrap();
    let driver = drivers
        .create(driver_request("Abebe Bekele", "ID-100"))
        .await
        .unwrap()
        .data
        .unwrap();
    assignments
        .create(assignment_request("BB5678C", driver.id, "2024-01-01", None))
        .await
        .unwrap();

    let as_of = date(2025, 1, 1);

    let unassigned = reports.unassigned_vehicles(as_of).await.unwrap();
    let plates: Vec<&str> = unassigned.iter().map(|v| v.plate_number.as_str()).collect();
    assert_eq!(plates, vec!["AA1234B"]);

    let summary = reports.assignment_summary(as_of).await.unwrap();
    assert_eq!(summary.ongoing_assignments, 1);
    assert_eq!(summary.unassigned_vehicles, 1);
    assert_eq!(summary.assignment_counts.len(), 1);
    assert_eq!(summary.assignment_counts[0].assigned_for, "Project");
    assert_eq!(summary.assignment_counts[0].vehicle_count, 2);
}

#[tokio::test]
async fn test_missing_yearly_inspection_is_reported_regardless_of_dates() {
    let pool = setup_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let compliance = ComplianceController::new(pool.clone());
    let reports = ReportService::new(pool.clone());

    vehicles
        .create(vehicle_request("AA1234B", "CH-001"))
        .await
        .unwrap();
    // Fechas al día pero inspección anual marcada No
    compliance
        .upsert("AA1234B", compliance_request("No"))
        .await
        .unwrap();

    let dashboard = reports.dashboard(date(2025, 6, 1), 7, 5).await.unwrap();
    assert_eq!(dashboard.compliance_issues.len(), 1);
    assert_eq!(dashboard.compliance_issues[0].plate_number, "AA1234B");
    assert_eq!(dashboard.compliance_issues[0].issue_type, "Inspection Missing");
}

#[tokio::test]
async fn test_compliance_upsert_keeps_one_row_per_vehicle() {
    let pool = setup_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let compliance = ComplianceController::new(pool.clone());
    let reports = ReportService::new(pool.clone());

    vehicles
        .create(vehicle_request("AA1234B", "CH-001"))
        .await
        .unwrap();
    compliance
        .upsert("AA1234B", compliance_request("No"))
        .await
        .unwrap();
    compliance
        .upsert("AA1234B", compliance_request("Yes"))
        .await
        .unwrap();

    let fetched = compliance.get_by_plate("AA1234B").await.unwrap();
    assert_eq!(fetched.yearly_inspection.as_str(), "Yes");

    // Con la inspección hecha y fechas vigentes ya no hay problema
    let dashboard = reports.dashboard(date(2025, 6, 1), 7, 5).await.unwrap();
    assert!(dashboard.compliance_issues.is_empty());
}

#[tokio::test]
async fn test_dashboard_maintenance_due_window_order_and_limit() {
    let pool = setup_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let maintenance = MaintenanceController::new(pool.clone());
    let reports = ReportService::new(pool.clone());

    for (i, plate) in ["AA1111A", "BB2222B", "CC3333C"].iter().enumerate() {
        vehicles
            .create(vehicle_request(plate, &format!("CH-{}", i)))
            .await
            .unwrap();
    }

    let request = |last: &str, next: &str| CreateMaintenanceRequest {
        last_service_km: 40_000,
        last_service_date: last.to_string(),
        next_service_km: 45_000,
        next_service_date: next.to_string(),
        maintenance_center: "Moenco".to_string(),
    };

    maintenance
        .create("AA1111A", request("2025-02-01", "2025-03-06"))
        .await
        .unwrap();
    maintenance
        .create("BB2222B", request("2025-02-01", "2025-03-02"))
        .await
        .unwrap();
    // Fuera de la ventana de 7 días
    maintenance
        .create("CC3333C", request("2025-02-01", "2025-04-01"))
        .await
        .unwrap();

    let dashboard = reports.dashboard(date(2025, 3, 1), 7, 5).await.unwrap();
    let plates: Vec<&str> = dashboard
        .maintenance_due
        .iter()
        .map(|r| r.plate_number.as_str())
        .collect();
    assert_eq!(plates, vec!["BB2222B", "AA1111A"]);

    let dashboard = reports.dashboard(date(2025, 3, 1), 7, 1).await.unwrap();
    assert_eq!(dashboard.maintenance_due.len(), 1);
    assert_eq!(dashboard.maintenance_due[0].plate_number, "BB2222B");

    assert_eq!(dashboard.vehicle_count, 3);
}

#[tokio::test]
async fn test_driver_roster_joins_single_active_assignment() {
    let pool = setup_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let drivers = DriverController::new(pool.clone());
    let assignments = AssignmentController::new(pool.clone());
    let reports = ReportService::new(pool.clone());

    vehicles
        .create(vehicle_request("AA1234B", "CH-001"))
        .await
        .unwrap();
    vehicles
        .create(vehicle_request("BB5678C", "CH-002"))
        .await
        .unwrap();

    let busy = drivers
        .create(driver_request("Abebe Bekele", "ID-100"))
        .await
        .unwrap()
        .data
        .unwrap();
    drivers
        .create(driver_request("Sara Tesfaye", "ID-200"))
        .await
        .unwrap();

    // Dos asignaciones activas para el mismo conductor: gana la de menor id
    assignments
        .create(assignment_request("AA1234B", busy.id, "2024-01-01", None))
        .await
        .unwrap();
    assignments
        .create(assignment_request("BB5678C", busy.id, "2024-02-01", None))
        .await
        .unwrap();

    let roster = reports.driver_roster(date(2025, 1, 1)).await.unwrap();
    assert_eq!(roster.len(), 2);

    assert_eq!(roster[0].driver_name, "Abebe Bekele");
    assert_eq!(roster[0].assigned_vehicle, "AA1234B (Toyota)");
    assert_eq!(roster[0].start_date, "2024-01-01");
    assert_eq!(roster[0].end_date, "-");

    assert_eq!(roster[1].driver_name, "Sara Tesfaye");
    assert_eq!(roster[1].assigned_vehicle, "Not assigned");
    assert_eq!(roster[1].work_place, "-");
}

#[tokio::test]
async fn test_deleting_vehicle_leaves_assignment_orphaned() {
    let pool = setup_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let drivers = DriverController::new(pool.clone());
    let assignments = AssignmentController::new(pool.clone());

    vehicles
        .create(vehicle_request("AA1234B", "CH-001"))
        .await
        .unwrap();
    let driver = drivers
        .create(driver_request("Abebe Bekele", "ID-100"))
        .await
        .unwrap()
        .data
        .unwrap();
    assignments
        .create(assignment_request("AA1234B", driver.id, "2024-01-01", None))
        .await
        .unwrap();

    vehicles.delete("AA1234B").await.unwrap();

    // El borrado no cascadea: la asignación queda huérfana
    assert_eq!(assignments.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_vehicle_and_driver_lookup_reports() {
    let pool = setup_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let drivers = DriverController::new(pool.clone());
    let compliance = ComplianceController::new(pool.clone());
    let assignments = AssignmentController::new(pool.clone());
    let reports = ReportService::new(pool.clone());

    vehicles
        .create(vehicle_request("AA1234B", "CH-001"))
        .await
        .unwrap();
    compliance
        .upsert("AA1234B", compliance_request("Yes"))
        .await
        .unwrap();
    let driver = drivers
        .create(driver_request("Abebe Bekele", "ID-100"))
        .await
        .unwrap()
        .data
        .unwrap();
    assignments
        .create(assignment_request("AA1234B", driver.id, "2024-01-01", None))
        .await
        .unwrap();

    let report = reports.vehicle_report("AA1234B").await.unwrap();
    assert_eq!(report.vehicle.plate_number, "AA1234B");
    assert!(report.compliance.is_some());
    assert_eq!(report.assignments.len(), 1);

    let by_id = reports.driver_report_by_id_number("ID-100").await.unwrap();
    assert_eq!(by_id.driver.name, "Abebe Bekele");
    assert_eq!(by_id.assignments.len(), 1);

    let by_name = reports.driver_report_by_name("bekele").await.unwrap();
    assert_eq!(by_name.driver.id, driver.id);

    let err = reports.driver_report_by_id_number("ID-999").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_reports_reflect_committed_mutations() {
    let pool = setup_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let reports = ReportService::new(pool.clone());

    let as_of = date(2025, 1, 1);
    assert_eq!(reports.dashboard(as_of, 7, 5).await.unwrap().vehicle_count, 0);

    vehicles
        .create(vehicle_request("AA1234B", "CH-001"))
        .await
        .unwrap();
    assert_eq!(reports.dashboard(as_of, 7, 5).await.unwrap().vehicle_count, 1);

    vehicles.delete("AA1234B").await.unwrap();
    assert_eq!(reports.dashboard(as_of, 7, 5).await.unwrap().vehicle_count, 0);
}
