use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::driver::Driver;

/// Request para registrar un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    pub id_number: String,

    #[validate(length(max = 15))]
    pub phone: Option<String>,

    #[validate(length(max = 100))]
    pub reporting_to: Option<String>,
}

/// Request para actualizar un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    pub id_number: String,

    #[validate(length(max = 15))]
    pub phone: Option<String>,

    #[validate(length(max = 100))]
    pub reporting_to: Option<String>,
}

/// Response de conductor para la API
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: i64,
    pub name: String,
    pub id_number: String,
    pub phone: String,
    pub reporting_to: String,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            id_number: driver.id_number,
            phone: driver.phone,
            reporting_to: driver.reporting_to,
        }
    }
}
