use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::compliance::{Compliance, InsuranceType, SafetyAudit, YesNo};

/// Request de upsert del registro de compliance de un vehículo
///
/// Las fechas vacías o ausentes se guardan como NULL.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertComplianceRequest {
    pub insurance_type: String,

    pub insurance_date: Option<String>,

    pub yearly_inspection: String,

    pub inspection_date: Option<String>,

    pub safety_audit: String,

    #[validate(length(max = 2000))]
    pub utilization_history: Option<String>,

    #[validate(length(max = 2000))]
    pub accident_history: Option<String>,
}

/// Response de compliance para la API
#[derive(Debug, Serialize)]
pub struct ComplianceResponse {
    pub plate_number: String,
    pub insurance_type: InsuranceType,
    pub insurance_date: Option<NaiveDate>,
    pub yearly_inspection: YesNo,
    pub inspection_date: Option<NaiveDate>,
    pub safety_audit: SafetyAudit,
    pub utilization_history: String,
    pub accident_history: String,
}

impl From<Compliance> for ComplianceResponse {
    fn from(compliance: Compliance) -> Self {
        Self {
            plate_number: compliance.plate_number,
            insurance_type: compliance.insurance_type,
            insurance_date: compliance.insurance_date,
            yearly_inspection: compliance.yearly_inspection,
            inspection_date: compliance.inspection_date,
            safety_audit: compliance.safety_audit,
            utilization_history: compliance.utilization_history,
            accident_history: compliance.accident_history,
        }
    }
}
