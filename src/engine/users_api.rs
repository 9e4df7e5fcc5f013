use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::UserAPI,
    entities::{NewUser, User, UserUpdate},
    error::{invalid_input_error, not_found_error, Error},
};

impl Engine {
    async fn store_user(&self, user: &User) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("UPDATE users SET data = $2 WHERE id = $1")
                .bind(&user.id)
                .bind(Json(user)),
        )
        .await?;

        Ok(())
    }
}

#[async_trait]
impl UserAPI for Engine {
    #[tracing::instrument(skip(self, params))]
    async fn create_user(&self, params: NewUser) -> Result<User, Error> {
        if params.name.trim().is_empty()
            || params.email.trim().is_empty()
            || params.password.is_empty()
        {
            return Err(invalid_input_error());
        }

        let user = User::new(params);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("INSERT INTO users (id, data) VALUES ($1, $2)")
                .bind(&user.id)
                .bind(Json(&user)),
        )
        .await?;

        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn.fetch_all(sqlx::query("SELECT data FROM users")).await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let Json(user) = row.try_get("data")?;
            users.push(user);
        }

        Ok(users)
    }

    #[tracing::instrument(skip(self))]
    async fn find_user(&self, id: Uuid) -> Result<User, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM users WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(|| not_found_error("user", &id))?;
        let Json(user) = result.try_get("data")?;

        Ok(user)
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User, Error> {
        let mut user = self.find_user(id).await?;
        user.apply(update);

        self.store_user(&user).await?;

        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn remove_user(&self, id: Uuid) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(sqlx::query("DELETE FROM users WHERE id = $1").bind(&id))
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("user", &id));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn block_user(&self, id: Uuid, reason: Option<String>) -> Result<User, Error> {
        let mut user = self.find_user(id).await?;
        user.block(reason);

        self.store_user(&user).await?;

        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn unblock_user(&self, id: Uuid) -> Result<User, Error> {
        let mut user = self.find_user(id).await?;
        user.unblock();

        self.store_user(&user).await?;

        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn ban_user(&self, id: Uuid, reason: Option<String>) -> Result<User, Error> {
        let mut user = self.find_user(id).await?;
        user.ban(reason);

        self.store_user(&user).await?;

        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn unban_user(&self, id: Uuid) -> Result<User, Error> {
        let mut user = self.find_user(id).await?;
        user.unban();

        self.store_user(&user).await?;

        Ok(user)
    }
}
