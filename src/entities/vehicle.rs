use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// load capacity in kilograms
    pub capacity: Option<i32>,
    pub driver_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewVehicle {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub capacity: Option<i32>,
    pub driver_id: Option<Uuid>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct VehicleUpdate {
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub capacity: Option<i32>,
    pub driver_id: Option<Uuid>,
}

impl Vehicle {
    pub fn new(params: NewVehicle) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            plate: params.plate,
            brand: params.brand,
            model: params.model,
            year: params.year,
            capacity: params.capacity,
            driver_id: params.driver_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: VehicleUpdate) {
        if let Some(plate) = update.plate {
            self.plate = plate;
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(capacity) = update.capacity {
            self.capacity = Some(capacity);
        }
        if let Some(driver_id) = update.driver_id {
            self.driver_id = Some(driver_id);
        }

        self.updated_at = Utc::now();
    }
}
