use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::entities::Vehicle;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        Self::Pending
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub license_number: String,
    pub approval_status: ApprovalStatus,
    /// free-form documentation submitted for the validation funnel
    pub documents: Option<Value>,
    pub created_by: Uuid,
    pub updated_by: Option<Uuid>,
    pub removed_by: Option<Uuid>,
    pub removed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A driver together with the vehicles currently assigned to it. Vehicles are
/// joined at read time and never written back with the driver row.
#[derive(Clone, Debug, Serialize)]
pub struct DriverProfile {
    #[serde(flatten)]
    pub driver: Driver,
    pub vehicles: Vec<Vehicle>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDriver {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DriverUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub license_number: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DocumentsUpdate {
    pub documents: Option<Value>,
    pub approval_status: Option<ApprovalStatus>,
}

impl Driver {
    pub fn new(params: NewDriver, created_by: Uuid) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name: params.name,
            email: params.email,
            phone: Some(params.phone),
            license_number: params.license_number,
            approval_status: ApprovalStatus::default(),
            documents: None,
            created_by,
            updated_by: None,
            removed_by: None,
            removed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: DriverUpdate, updated_by: Uuid) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(license_number) = update.license_number {
            self.license_number = license_number;
        }

        self.updated_by = Some(updated_by);
        self.updated_at = Utc::now();
    }

    pub fn apply_documents(&mut self, update: DocumentsUpdate, updated_by: Uuid) {
        if let Some(documents) = update.documents {
            self.documents = Some(documents);
        }
        if let Some(approval_status) = update.approval_status {
            self.approval_status = approval_status;
        }

        self.updated_by = Some(updated_by);
        self.updated_at = Utc::now();
    }

    pub fn remove(&mut self, removed_by: Uuid) {
        self.removed_by = Some(removed_by);
        self.removed_at = Some(Utc::now());
    }
}

#[test]
fn documents_update_moves_approval_status() {
    let mut driver = Driver::new(
        NewDriver {
            name: "João".into(),
            email: "joao@carrus.dev".into(),
            phone: "+55 11 99999-0000".into(),
            license_number: "12345678900".into(),
        },
        Uuid::new_v4(),
    );

    assert_eq!(driver.approval_status, ApprovalStatus::Pending);

    driver.apply_documents(
        DocumentsUpdate {
            documents: Some(serde_json::json!({ "cnh": "12345678900" })),
            approval_status: Some(ApprovalStatus::Approved),
        },
        Uuid::new_v4(),
    );

    assert_eq!(driver.approval_status, ApprovalStatus::Approved);
    assert!(driver.documents.is_some());
}
