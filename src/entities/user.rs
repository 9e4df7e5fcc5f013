use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub is_blocked: bool,
    pub block_reason: Option<String>,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What the API returns for a user: everything but the password.
#[derive(Clone, Debug, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_blocked: bool,
    pub block_reason: Option<String>,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            is_blocked: user.is_blocked,
            block_reason: user.block_reason,
            is_banned: user.is_banned,
            ban_reason: user.ban_reason,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

impl User {
    pub fn new(params: NewUser) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name: params.name,
            email: params.email,
            password: params.password,
            phone: params.phone,
            is_blocked: false,
            block_reason: None,
            is_banned: false,
            ban_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }

        self.updated_at = Utc::now();
    }

    pub fn block(&mut self, reason: Option<String>) {
        self.is_blocked = true;
        self.block_reason = reason;
        self.updated_at = Utc::now();
    }

    pub fn unblock(&mut self) {
        self.is_blocked = false;
        self.block_reason = None;
        self.updated_at = Utc::now();
    }

    pub fn ban(&mut self, reason: Option<String>) {
        self.is_banned = true;
        self.ban_reason = reason;
        self.updated_at = Utc::now();
    }

    pub fn unban(&mut self) {
        self.is_banned = false;
        self.ban_reason = None;
        self.updated_at = Utc::now();
    }
}

#[test]
fn view_drops_the_password() {
    let user = User::new(NewUser {
        name: "Ana".into(),
        email: "ana@carrus.dev".into(),
        password: "hunter2".into(),
        phone: None,
    });

    let serialized = serde_json::to_value(UserView::from(user)).unwrap();
    assert!(serialized.get("password").is_none());
}

#[test]
fn unblock_clears_the_reason() {
    let mut user = User::new(NewUser {
        name: "Ana".into(),
        email: "ana@carrus.dev".into(),
        password: "hunter2".into(),
        phone: None,
    });

    user.block(Some("payment pending".into()));
    assert!(user.is_blocked);

    user.unblock();
    assert!(!user.is_blocked);
    assert!(user.block_reason.is_none());
}
