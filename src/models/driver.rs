//! Modelo de Driver
//!
//! El id es autoincremental y lo asigna el store; id_number es el documento
//! externo del conductor y es único a nivel global.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub id_number: String,
    pub phone: String,
    pub reporting_to: String,
}
