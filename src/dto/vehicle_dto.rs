use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{AssignedFor, FuelType, Vehicle, VehicleType};

/// Request para registrar un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 20))]
    pub plate_number: String,

    #[validate(length(min = 2, max = 50))]
    pub chasis: String,

    pub vehicle_type: String,

    #[validate(length(min = 1, max = 50))]
    pub make: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    #[validate(length(min = 4, max = 4))]
    pub year: String,

    pub fuel_type: String,

    pub fuel_capacity: Option<f64>,

    pub fuel_consumption: Option<f64>,

    pub loading_capacity: Option<String>,

    pub assigned_for: String,
}

/// Request para actualizar un vehículo existente
///
/// El formulario de edición reenvía todos los campos menos la placa.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 50))]
    pub chasis: String,

    pub vehicle_type: String,

    #[validate(length(min = 1, max = 50))]
    pub make: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    #[validate(length(min = 4, max = 4))]
    pub year: String,

    pub fuel_type: String,

    pub fuel_capacity: Option<f64>,

    pub fuel_consumption: Option<f64>,

    pub loading_capacity: Option<String>,

    pub assigned_for: String,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
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

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            plate_number: vehicle.plate_number,
            chasis: vehicle.chasis,
            vehicle_type: vehicle.vehicle_type,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            fuel_type: vehicle.fuel_type,
            fuel_capacity: vehicle.fuel_capacity,
            fuel_consumption: vehicle.fuel_consumption,
            loading_capacity: vehicle.loading_capacity,
            assigned_for: vehicle.assigned_for,
        }
    }
}
