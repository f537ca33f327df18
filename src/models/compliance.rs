//! Modelo de Compliance
//!
//! Registro uno-a-uno con Vehicle (clave = placa). Las fechas de seguro e
//! inspección son opcionales; una fecha ausente nunca cuenta como vencida.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Tipo de seguro - mapea a la columna TEXT insurance_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum InsuranceType {
    #[serde(rename = "Fully Insured")]
    #[sqlx(rename = "Fully Insured")]
    FullyInsured,
    Partial,
}

impl InsuranceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::FullyInsured => "Fully Insured",
            InsuranceType::Partial => "Partial",
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsuranceType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Fully Insured" => Ok(InsuranceType::FullyInsured),
            "Partial" => Ok(InsuranceType::Partial),
            other => Err(format!(
                "Invalid insurance type '{}' (expected Fully Insured or Partial)",
                other
            )),
        }
    }
}

/// Campo Sí/No del formulario de inspección anual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Yes" => Ok(YesNo::Yes),
            "No" => Ok(YesNo::No),
            other => Err(format!("Invalid value '{}' (expected Yes or No)", other)),
        }
    }
}

/// Resultado de la auditoría de seguridad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum SafetyAudit {
    Safe,
    Fair,
    #[serde(rename = "Not Safe")]
    #[sqlx(rename = "Not Safe")]
    NotSafe,
}

impl SafetyAudit {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyAudit::Safe => "Safe",
            SafetyAudit::Fair => "Fair",
            SafetyAudit::NotSafe => "Not Safe",
        }
    }
}

impl fmt::Display for SafetyAudit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SafetyAudit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Safe" => Ok(SafetyAudit::Safe),
            "Fair" => Ok(SafetyAudit::Fair),
            "Not Safe" => Ok(SafetyAudit::NotSafe),
            other => Err(format!(
                "Invalid safety audit '{}' (expected Safe, Fair or Not Safe)",
                other
            )),
        }
    }
}

/// Compliance - mapea exactamente a la tabla compliance
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Compliance {
    pub plate_number: String,
    pub insurance_type: InsuranceType,
    pub insurance_date: Option<NaiveDate>,
    pub yearly_inspection: YesNo,
    pub inspection_date: Option<NaiveDate>,
    pub safety_audit: SafetyAudit,
    pub utilization_history: String,
    pub accident_history: String,
}
