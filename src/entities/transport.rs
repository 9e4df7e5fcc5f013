use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Freight,
    LastMile,
    Ftl,
    Ltl,
}

impl Default for TransportKind {
    fn default() -> Self {
        Self::Freight
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportStatus {
    Scheduled,
    InTransit,
    Delivered,
    Cancelled,
}

impl TransportStatus {
    pub fn name(&self) -> String {
        match self {
            Self::Scheduled => "scheduled".into(),
            Self::InTransit => "in_transit".into(),
            Self::Delivered => "delivered".into(),
            Self::Cancelled => "cancelled".into(),
        }
    }
}

impl Default for TransportStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transport {
    pub id: Uuid,
    pub code: String,
    pub kind: TransportKind,
    pub status: TransportStatus,
    pub pickup_address: Option<String>,
    pub delivery_address: Option<String>,
    pub pickup_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub driver_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub cargo_details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTransport {
    pub code: Option<String>,
    #[serde(default)]
    pub kind: TransportKind,
    pub pickup_address: Option<String>,
    pub delivery_address: Option<String>,
    pub pickup_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub driver_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub cargo_details: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TransportUpdate {
    pub kind: Option<TransportKind>,
    pub status: Option<TransportStatus>,
    pub pickup_address: Option<String>,
    pub delivery_address: Option<String>,
    pub pickup_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub driver_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub cargo_details: Option<String>,
}

impl Transport {
    pub fn new(params: NewTransport) -> Self {
        let now = Utc::now();
        let code = params.code.unwrap_or_else(generate_code);

        Self {
            id: Uuid::new_v4(),
            code,
            kind: params.kind,
            status: TransportStatus::default(),
            pickup_address: params.pickup_address,
            delivery_address: params.delivery_address,
            pickup_date: params.pickup_date,
            delivery_date: params.delivery_date,
            driver_id: params.driver_id,
            vehicle_id: params.vehicle_id,
            cargo_details: params.cargo_details,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: TransportUpdate) {
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(pickup_address) = update.pickup_address {
            self.pickup_address = Some(pickup_address);
        }
        if let Some(delivery_address) = update.delivery_address {
            self.delivery_address = Some(delivery_address);
        }
        if let Some(pickup_date) = update.pickup_date {
            self.pickup_date = Some(pickup_date);
        }
        if let Some(delivery_date) = update.delivery_date {
            self.delivery_date = Some(delivery_date);
        }
        if let Some(driver_id) = update.driver_id {
            self.driver_id = Some(driver_id);
        }
        if let Some(vehicle_id) = update.vehicle_id {
            self.vehicle_id = Some(vehicle_id);
        }
        if let Some(cargo_details) = update.cargo_details {
            self.cargo_details = Some(cargo_details);
        }

        self.updated_at = Utc::now();
    }
}

fn generate_code() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect::<String>()
        .to_uppercase();

    format!("TR-{}", suffix)
}

#[test]
fn generated_codes_carry_the_transport_prefix() {
    let transport = Transport::new(NewTransport {
        code: None,
        kind: TransportKind::default(),
        pickup_address: None,
        delivery_address: None,
        pickup_date: None,
        delivery_date: None,
        driver_id: None,
        vehicle_id: None,
        cargo_details: None,
    });

    assert!(transport.code.starts_with("TR-"));
    assert_eq!(transport.code.len(), 11);
    assert_eq!(transport.status, TransportStatus::Scheduled);
}
