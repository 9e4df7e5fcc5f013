use super::Engine;

use async_trait::async_trait;
use serde_json::json;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::{TransportAPI, VehicleAPI},
    entities::{NewTransport, Transport, TransportUpdate},
    error::{not_found_error, Error},
};

impl Engine {
    // referenced drivers and vehicles must exist before a transport points at them
    async fn check_assignments(
        &self,
        driver_id: Option<Uuid>,
        vehicle_id: Option<Uuid>,
    ) -> Result<(), Error> {
        if let Some(driver_id) = driver_id {
            self.fetch_driver(driver_id).await?;
        }
        if let Some(vehicle_id) = vehicle_id {
            self.find_vehicle(vehicle_id).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl TransportAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_transport(&self, params: NewTransport) -> Result<Transport, Error> {
        self.check_assignments(params.driver_id, params.vehicle_id)
            .await?;

        let transport = Transport::new(params);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("INSERT INTO transports (id, code, status, data) VALUES ($1, $2, $3, $4)")
                .bind(&transport.id)
                .bind(&transport.code)
                .bind(transport.status.name())
                .bind(Json(&transport)),
        )
        .await?;

        self.notifier.notify("TRANSPORT_CREATED", json!(&transport));

        Ok(transport)
    }

    #[tracing::instrument(skip(self))]
    async fn list_transports(&self) -> Result<Vec<Transport>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query("SELECT data FROM transports"))
            .await?;

        let mut transports = Vec::with_capacity(rows.len());
        for row in rows {
            let Json(transport) = row.try_get("data")?;
            transports.push(transport);
        }

        Ok(transports)
    }

    #[tracing::instrument(skip(self))]
    async fn find_transport(&self, id: Uuid) -> Result<Transport, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM transports WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(|| not_found_error("transport", &id))?;
        let Json(transport) = result.try_get("data")?;

        Ok(transport)
    }

    #[tracing::instrument(skip(self))]
    async fn update_transport(
        &self,
        id: Uuid,
        update: TransportUpdate,
    ) -> Result<Transport, Error> {
        let mut transport = self.find_transport(id).await?;

        self.check_assignments(update.driver_id, update.vehicle_id)
            .await?;
        transport.apply(update);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("UPDATE transports SET status = $2, data = $3 WHERE id = $1")
                .bind(&transport.id)
                .bind(transport.status.name())
                .bind(Json(&transport)),
        )
        .await?;

        self.notifier.notify("TRANSPORT_UPDATED", json!(&transport));

        Ok(transport)
    }

    #[tracing::instrument(skip(self))]
    async fn remove_transport(&self, id: Uuid) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(sqlx::query("DELETE FROM transports WHERE id = $1").bind(&id))
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("transport", &id));
        }

        self.notifier.notify("TRANSPORT_REMOVED", json!({ "id": id }));

        Ok(())
    }
}
