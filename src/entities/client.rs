use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientKind {
    Individual,
    Company,
}

impl Default for ClientKind {
    fn default() -> Self {
        Self::Individual
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub kind: ClientKind,
    pub tax_id: Option<String>,
    pub business_name: Option<String>,
    pub state_registration: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
    pub created_by: Uuid,
    pub updated_by: Option<Uuid>,
    pub removed_by: Option<Uuid>,
    pub removed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Structured postal address accepted at the API boundary. Stored as a single
/// comma-joined line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

impl Address {
    pub fn into_line(self) -> String {
        format!(
            "{}, {}, {}, {}, {}, {}",
            self.street, self.number, self.neighborhood, self.city, self.state, self.zipcode
        )
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
    #[serde(default)]
    pub kind: ClientKind,
    pub tax_id: Option<String>,
    pub business_name: Option<String>,
    pub state_registration: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub kind: Option<ClientKind>,
    pub tax_id: Option<String>,
    pub business_name: Option<String>,
    pub state_registration: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
}

impl Client {
    pub fn new(params: NewClient, created_by: Uuid) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name: params.name,
            email: params.email,
            phone: params.phone,
            address: params.address.map(Address::into_line),
            kind: params.kind,
            tax_id: params.tax_id,
            business_name: params.business_name,
            state_registration: params.state_registration,
            website: params.website,
            notes: params.notes,
            created_by,
            updated_by: None,
            removed_by: None,
            removed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    // fields absent from the update keep their stored value
    pub fn apply(&mut self, update: ClientUpdate, updated_by: Uuid) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = update.address {
            self.address = Some(address.into_line());
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(tax_id) = update.tax_id {
            self.tax_id = Some(tax_id);
        }
        if let Some(business_name) = update.business_name {
            self.business_name = Some(business_name);
        }
        if let Some(state_registration) = update.state_registration {
            self.state_registration = Some(state_registration);
        }
        if let Some(website) = update.website {
            self.website = Some(website);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
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
fn address_formats_as_single_line() {
    let address = Address {
        street: "Avenida Paulista".into(),
        number: "1000".into(),
        neighborhood: "Bela Vista".into(),
        city: "São Paulo".into(),
        state: "SP".into(),
        zipcode: "01310-100".into(),
    };

    assert_eq!(
        address.into_line(),
        "Avenida Paulista, 1000, Bela Vista, São Paulo, SP, 01310-100"
    );
}

#[test]
fn update_preserves_address_when_absent() {
    let mut client = Client::new(
        NewClient {
            name: "ACME".into(),
            email: "ops@acme.com".into(),
            phone: None,
            address: Some(Address {
                street: "Rua A".into(),
                number: "1".into(),
                neighborhood: "Centro".into(),
                city: "Campinas".into(),
                state: "SP".into(),
                zipcode: "13000-000".into(),
            }),
            kind: ClientKind::Company,
            tax_id: None,
            business_name: None,
            state_registration: None,
            website: None,
            notes: None,
        },
        Uuid::new_v4(),
    );

    let stored = client.address.clone();
    client.apply(
        ClientUpdate {
            name: Some("ACME Logistics".into()),
            ..Default::default()
        },
        Uuid::new_v4(),
    );

    assert_eq!(client.name, "ACME Logistics");
    assert_eq!(client.address, stored);
}
