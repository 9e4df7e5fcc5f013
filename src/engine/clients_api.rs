use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::ClientAPI,
    entities::{Client, ClientUpdate, NewClient},
    error::{invalid_input_error, not_found_error, Error},
};

#[async_trait]
impl ClientAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_client(&self, params: NewClient, actor: Uuid) -> Result<Client, Error> {
        if params.name.trim().is_empty() || params.email.trim().is_empty() {
            return Err(invalid_input_error());
        }

        let client = Client::new(params, actor);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("INSERT INTO clients (id, data) VALUES ($1, $2)")
                .bind(&client.id)
                .bind(Json(&client)),
        )
        .await?;

        Ok(client)
    }

    #[tracing::instrument(skip(self))]
    async fn list_clients(&self) -> Result<Vec<Client>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query(
                "SELECT data FROM clients WHERE removed_at IS NULL",
            ))
            .await?;

        let mut clients = Vec::with_capacity(rows.len());
        for row in rows {
            let Json(client) = row.try_get("data")?;
            clients.push(client);
        }

        Ok(clients)
    }

    #[tracing::instrument(skip(self))]
    async fn find_client(&self, id: Uuid) -> Result<Client, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query("SELECT data FROM clients WHERE id = $1 AND removed_at IS NULL")
                    .bind(&id),
            )
            .await?;

        let result = maybe_result.ok_or_else(|| not_found_error("client", &id))?;
        let Json(client) = result.try_get("data")?;

        Ok(client)
    }

    #[tracing::instrument(skip(self))]
    async fn update_client(
        &self,
        id: Uuid,
        update: ClientUpdate,
        actor: Uuid,
    ) -> Result<Client, Error> {
        let mut client = self.find_client(id).await?;
        client.apply(update, actor);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("UPDATE clients SET data = $2 WHERE id = $1")
                .bind(&client.id)
                .bind(Json(&client)),
        )
        .await?;

        Ok(client)
    }

    #[tracing::instrument(skip(self))]
    async fn remove_client(&self, id: Uuid, actor: Uuid) -> Result<(), Error> {
        let mut client = self.find_client(id).await?;
        client.remove(actor);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("UPDATE clients SET removed_at = $2, data = $3 WHERE id = $1")
                .bind(&client.id)
                .bind(&client.removed_at)
                .bind(Json(&client)),
        )
        .await?;

        Ok(())
    }
}
