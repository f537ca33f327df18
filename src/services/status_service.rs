//! Derivación de estado operativo
//!
//! Funciones puras sobre un snapshot de registros más una fecha de
//! referencia (`as_of`): qué asignaciones están activas, qué vehículos
//! quedan sin asignar, qué servicios vencen pronto y qué vehículos están
//! fuera de compliance. Nada aquí toca el store ni muta estado; llamar
//! dos veces con el mismo snapshot produce el mismo resultado.

use chrono::{Duration, Months, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::models::assignment::Assignment;
use crate::models::compliance::{Compliance, YesNo};
use crate::models::maintenance::Maintenance;
use crate::models::vehicle::Vehicle;

/// Ventana por defecto del dashboard para servicios próximos
pub const DEFAULT_MAINTENANCE_WINDOW_DAYS: i64 = 7;

/// Tamaño por defecto de las listas top-N del dashboard
pub const DEFAULT_DASHBOARD_LIMIT: usize = 5;

/// Una asignación está activa si no tiene fecha de fin o si la fecha de
/// fin no es anterior a la fecha de referencia. No existe ningún otro
/// campo de estado.
pub fn is_assignment_active(assignment: &Assignment, as_of: NaiveDate) -> bool {
    match assignment.end_date {
        None => true,
        Some(end) => end >= as_of,
    }
}

/// Todas las asignaciones activas a la fecha de referencia.
///
/// Puede haber varias asignaciones activas para el mismo vehículo o
/// conductor; el modelo lo permite y aquí no se corrige.
pub fn active_assignments(assignments: &[Assignment], as_of: NaiveDate) -> Vec<&Assignment> {
    assignments
        .iter()
        .filter(|a| is_assignment_active(a, as_of))
        .collect()
}

/// Anti-join: vehículos cuya placa no aparece en ninguna asignación
/// activa. El orden del resultado es el orden del scan de vehículos.
pub fn unassigned_vehicles<'a>(
    vehicles: &'a [Vehicle],
    assignments: &[Assignment],
    as_of: NaiveDate,
) -> Vec<&'a Vehicle> {
    let assigned_plates: HashSet<&str> = active_assignments(assignments, as_of)
        .into_iter()
        .map(|a| a.plate_number.as_str())
        .collect();

    vehicles
        .iter()
        .filter(|v| !assigned_plates.contains(v.plate_number.as_str()))
        .collect()
}

/// Registros de mantenimiento cuyo próximo servicio cae dentro de la
/// ventana, ascendentes por fecha, truncados a `limit`.
pub fn maintenance_due(
    records: &[Maintenance],
    as_of: NaiveDate,
    window_days: i64,
    limit: usize,
) -> Vec<&Maintenance> {
    let horizon = as_of + Duration::days(window_days);

    let mut due: Vec<&Maintenance> = records
        .iter()
        .filter(|m| m.next_service_date <= horizon)
        .collect();
    due.sort_by_key(|m| m.next_service_date);
    due.truncate(limit);
    due
}

/// Clasificación de un problema de compliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceIssue {
    InspectionMissing,
    InspectionExpired,
    InsuranceExpired,
    Unknown,
}

impl ComplianceIssue {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceIssue::InspectionMissing => "Inspection Missing",
            ComplianceIssue::InspectionExpired => "Inspection Expired",
            ComplianceIssue::InsuranceExpired => "Insurance Expired",
            ComplianceIssue::Unknown => "Unknown Issue",
        }
    }
}

impl fmt::Display for ComplianceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn one_year_before(as_of: NaiveDate) -> NaiveDate {
    as_of - Months::new(12)
}

/// Filtro de pertenencia: el vehículo tiene algún problema de compliance.
/// Una fecha ausente nunca cuenta como vencida.
pub fn has_compliance_issue(compliance: &Compliance, as_of: NaiveDate) -> bool {
    let cutoff = one_year_before(as_of);

    compliance.yearly_inspection == YesNo::No
        || compliance.inspection_date.map_or(false, |d| d < cutoff)
        || compliance.insurance_date.map_or(false, |d| d < cutoff)
}

/// Clasificación ordenada, primera regla que aplica gana.
pub fn classify_compliance_issue(compliance: &Compliance, as_of: NaiveDate) -> ComplianceIssue {
    let cutoff = one_year_before(as_of);

    if compliance.yearly_inspection == YesNo::No {
        ComplianceIssue::InspectionMissing
    } else if compliance.inspection_date.map_or(false, |d| d < cutoff) {
        ComplianceIssue::InspectionExpired
    } else if compliance.insurance_date.map_or(false, |d| d < cutoff) {
        ComplianceIssue::InsuranceExpired
    } else {
        ComplianceIssue::Unknown
    }
}

/// Vehículos con problemas de compliance, clasificados y truncados a
/// `limit`, en orden de scan.
///
/// El filtro de pertenencia y la clasificación son dos evaluaciones
/// separadas; no colapsar en una sola pasada, la rama Unknown depende de
/// esa separación.
pub fn compliance_issues(
    rows: &[Compliance],
    as_of: NaiveDate,
    limit: usize,
) -> Vec<(&Compliance, ComplianceIssue)> {
    rows.iter()
        .filter(|c| has_compliance_issue(c, as_of))
        .map(|c| (c, classify_compliance_issue(c, as_of)))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::compliance::{InsuranceType, SafetyAudit};
    use crate::models::maintenance::MaintenanceCenter;
    use crate::models::vehicle::{AssignedFor, FuelType, VehicleType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn vehicle(plate: &str) -> Vehicle {
        Vehicle {
            plate_number: plate.to_string(),
            chasis: format!("CH-{}", plate),
            vehicle_type: VehicleType::Pickup,
            make: "Toyota".to_string(),
            model: "Hilux".to_string(),
            year: "2020".to_string(),
            fuel_type: FuelType::Diesel,
            fuel_capacity: 80.0,
            fuel_consumption: 9.5,
            loading_capacity: "1 ton".to_string(),
            assigned_for: AssignedFor::Project,
        }
    }

    fn assignment(id: i64, plate: &str, driver_id: i64, end_date: Option<NaiveDate>) -> Assignment {
        Assignment {
            id,
            plate_number: plate.to_string(),
            driver_id,
            work_place: "Field office".to_string(),
            start_date: date(2024, 1, 1),
            end_date,
            gps_position: String::new(),
            geofence_violations: 0,
        }
    }

    fn maintenance(id: i64, plate: &str, next_service_date: NaiveDate) -> Maintenance {
        Maintenance {
            id,
            plate_number: plate.to_string(),
            last_service_km: 40_000,
            last_service_date: date(2024, 11, 1),
            next_service_km: 45_000,
            next_service_date,
            maintenance_center: MaintenanceCenter::Moenco,
        }
    }

    fn compliance(
        plate: &str,
        yearly_inspection: YesNo,
        inspection_date: Option<NaiveDate>,
        insurance_date: Option<NaiveDate>,
    ) -> Compliance {
        Compliance {
            plate_number: plate.to_string(),
            insurance_type: InsuranceType::FullyInsured,
            insurance_date,
            yearly_inspection,
            inspection_date,
            safety_audit: SafetyAudit::Safe,
            utilization_history: String::new(),
            accident_history: String::new(),
        }
    }

    #[test]
    fn test_open_ended_assignment_is_always_active() {
        let a = assignment(1, "BB5678C", 1, None);
        assert!(is_assignment_active(&a, date(2025, 1, 1)));
        assert!(is_assignment_active(&a, date(2099, 12, 31)));
    }

    #[test]
    fn test_assignment_activity_is_monotonic_in_as_of() {
        let end = date(2024, 6, 30);
        let a = assignment(1, "AA1234B", 1, Some(end));

        // Activa hasta la fecha de fin inclusive, inactiva después
        assert!(is_assignment_active(&a, date(2024, 6, 29)));
        assert!(is_assignment_active(&a, end));
        assert!(!is_assignment_active(&a, date(2024, 7, 1)));

        let mut was_active = true;
        for offset in 0..400 {
            let day = date(2024, 1, 1) + Duration::days(offset);
            let active = is_assignment_active(&a, day);
            // Una vez inactiva nunca vuelve a activarse
            assert!(was_active || !active);
            was_active = active;
        }
    }

    #[test]
    fn test_unassigned_vehicles_is_the_anti_join_of_active_assignments() {
        let vehicles = vec![vehicle("AA1234B"), vehicle("BB5678C"), vehicle("CC9999D")];
        let assignments = vec![
            assignment(1, "BB5678C", 1, None),
            assignment(2, "CC9999D", 2, Some(date(2024, 3, 31))),
        ];
        let as_of = date(2025, 1, 1);

        let unassigned = unassigned_vehicles(&vehicles, &assignments, as_of);
        let unassigned_plates: Vec<&str> =
            unassigned.iter().map(|v| v.plate_number.as_str()).collect();

        // La asignación abierta de BB5678C la excluye; la de CC9999D venció
        assert_eq!(unassigned_plates, vec!["AA1234B", "CC9999D"]);

        // Equivalencia con la definición por asignación activa
        for v in &vehicles {
            let has_active = assignments
                .iter()
                .any(|a| a.plate_number == v.plate_number && is_assignment_active(a, as_of));
            let in_unassigned = unassigned_plates.contains(&v.plate_number.as_str());
            assert_eq!(in_unassigned, !has_active);
        }
    }

    #[test]
    fn test_active_assignment_set_includes_open_ended() {
        let assignments = vec![assignment(7, "BB5678C", 3, None)];
        let active = active_assignments(&assignments, date(2025, 1, 1));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 7);
    }

    #[test]
    fn test_duplicate_active_assignments_are_permitted() {
        let assignments = vec![
            assignment(1, "AA1234B", 1, None),
            assignment(2, "AA1234B", 2, None),
        ];
        assert_eq!(active_assignments(&assignments, date(2025, 1, 1)).len(), 2);
    }

    #[test]
    fn test_maintenance_due_window_order_and_limit() {
        let as_of = date(2025, 3, 1);
        let records = vec![
            maintenance(1, "AA", date(2025, 3, 8)),
            maintenance(2, "BB", date(2025, 3, 2)),
            maintenance(3, "CC", date(2025, 2, 20)),
            maintenance(4, "DD", date(2025, 3, 9)),
            maintenance(5, "EE", date(2025, 3, 5)),
        ];

        let due = maintenance_due(&records, as_of, 7, 3);
        assert_eq!(due.len(), 3);

        let horizon = as_of + Duration::days(7);
        let mut previous = None;
        for m in &due {
            assert!(m.next_service_date <= horizon);
            if let Some(prev) = previous {
                assert!(m.next_service_date >= prev);
            }
            previous = Some(m.next_service_date);
        }

        // El registro fuera de ventana nunca aparece
        assert!(due.iter().all(|m| m.id != 4));
    }

    #[test]
    fn test_maintenance_due_respects_limit() {
        let as_of = date(2025, 3, 1);
        let records: Vec<Maintenance> = (0..10)
            .map(|i| maintenance(i, "AA", date(2025, 3, 1) + Duration::days(i)))
            .collect();
        assert_eq!(maintenance_due(&records, as_of, 30, 5).len(), 5);
    }

    #[test]
    fn test_inspection_missing_takes_precedence() {
        // Aunque las fechas también estén vencidas, gana la primera regla
        let old = date(2020, 1, 1);
        let row = compliance("AA1234B", YesNo::No, Some(old), Some(old));
        let issues = compliance_issues(std::slice::from_ref(&row), date(2025, 6, 1), 5);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].1, ComplianceIssue::InspectionMissing);
        assert_eq!(issues[0].1.to_string(), "Inspection Missing");
    }

    #[test]
    fn test_expired_inspection_beats_expired_insurance() {
        let old = date(2020, 1, 1);
        let row = compliance("AA", YesNo::Yes, Some(old), Some(old));
        assert_eq!(
            classify_compliance_issue(&row, date(2025, 6, 1)),
            ComplianceIssue::InspectionExpired
        );
    }

    #[test]
    fn test_insurance_expired_when_inspection_is_current() {
        let row = compliance("AA", YesNo::Yes, Some(date(2025, 5, 1)), Some(date(2020, 1, 1)));
        let as_of = date(2025, 6, 1);
        assert!(has_compliance_issue(&row, as_of));
        assert_eq!(
            classify_compliance_issue(&row, as_of),
            ComplianceIssue::InsuranceExpired
        );
    }

    #[test]
    fn test_absent_dates_never_count_as_expired() {
        let row = compliance("AA", YesNo::Yes, None, None);
        let as_of = date(2025, 6, 1);
        assert!(!has_compliance_issue(&row, as_of));
        assert!(compliance_issues(std::slice::from_ref(&row), as_of, 5).is_empty());
    }

    #[test]
    fn test_compliance_issues_truncates_to_limit() {
        let rows: Vec<Compliance> = (0..8)
            .map(|i| compliance(&format!("V{}", i), YesNo::No, None, None))
            .collect();
        assert_eq!(compliance_issues(&rows, date(2025, 6, 1), 5).len(), 5);
    }

    #[test]
    fn test_derivations_are_idempotent() {
        let vehicles = vec![vehicle("AA1234B"), vehicle("BB5678C")];
        let assignments = vec![assignment(1, "AA1234B", 1, Some(date(2025, 2, 1)))];
        let records = vec![maintenance(1, "AA1234B", date(2025, 3, 3))];
        let rows = vec![compliance("BB5678C", YesNo::No, None, None)];
        let as_of = date(2025, 3, 1);

        let first: Vec<&str> = unassigned_vehicles(&vehicles, &assignments, as_of)
            .iter()
            .map(|v| v.plate_number.as_str())
            .collect();
        let second: Vec<&str> = unassigned_vehicles(&vehicles, &assignments, as_of)
            .iter()
            .map(|v| v.plate_number.as_str())
            .collect();
        assert_eq!(first, second);

        let due_a: Vec<i64> = maintenance_due(&records, as_of, 7, 5).iter().map(|m| m.id).collect();
        let due_b: Vec<i64> = maintenance_due(&records, as_of, 7, 5).iter().map(|m| m.id).collect();
        assert_eq!(due_a, due_b);

        let issues_a: Vec<ComplianceIssue> =
            compliance_issues(&rows, as_of, 5).iter().map(|(_, i)| *i).collect();
        let issues_b: Vec<ComplianceIssue> =
            compliance_issues(&rows, as_of, 5).iter().map(|(_, i)| *i).collect();
        assert_eq!(issues_a, issues_b);
    }
}
