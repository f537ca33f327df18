//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y los conjuntos cerrados de
//! opciones del formulario (tipo de vehículo, combustible, categoría).
//! La placa se normaliza (mayúsculas, sin espacios) antes de llegar aquí.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Tipo de vehículo - mapea a la columna TEXT vehicle_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum VehicleType {
    Pickup,
    V8,
    Hardtop,
    Other,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Pickup => "Pickup",
            VehicleType::V8 => "V8",
            VehicleType::Hardtop => "Hardtop",
            VehicleType::Other => "Other",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pickup" => Ok(VehicleType::Pickup),
            "V8" => Ok(VehicleType::V8),
            "Hardtop" => Ok(VehicleType::Hardtop),
            "Other" => Ok(VehicleType::Other),
            other => Err(format!(
                "Invalid vehicle type '{}' (expected Pickup, V8, Hardtop or Other)",
                other
            )),
        }
    }
}

/// Tipo de combustible - mapea a la columna TEXT fuel_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum FuelType {
    Diesel,
    Benzin,
    Hybrid,
    Electric,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Benzin => "Benzin",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Diesel" => Ok(FuelType::Diesel),
            "Benzin" => Ok(FuelType::Benzin),
            "Hybrid" => Ok(FuelType::Hybrid),
            "Electric" => Ok(FuelType::Electric),
            other => Err(format!(
                "Invalid fuel type '{}' (expected Diesel, Benzin, Hybrid or Electric)",
                other
            )),
        }
    }
}

/// Categoría de asignación - mapea a la columna TEXT assigned_for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum AssignedFor {
    Project,
    Region,
    #[serde(rename = "Center Office")]
    #[sqlx(rename = "Center Office")]
    CenterOffice,
    Other,
}

impl AssignedFor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignedFor::Project => "Project",
            AssignedFor::Region => "Region",
            AssignedFor::CenterOffice => "Center Office",
            AssignedFor::Other => "Other",
        }
    }
}

impl fmt::Display for AssignedFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignedFor {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Project" => Ok(AssignedFor::Project),
            "Region" => Ok(AssignedFor::Region),
            "Center Office" => Ok(AssignedFor::CenterOffice),
            "Other" => Ok(AssignedFor::Other),
            other => Err(format!(
                "Invalid assignment category '{}' (expected Project, Region, Center Office or Other)",
                other
            )),
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub plate_number: String,
    pub chasis: String,
    pub vehicle_type: VehicleType,
    pub make: String,
    pub model: String,
    pub year: String,
    pub fuel_type: FuelType,
    pub fuel_capacity: f64,
    pub fuel_consumption: f64,
    pub loading_capacity: String,
    pub assigned_for: AssignedFor,
}
