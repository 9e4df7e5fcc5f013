use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::VehicleAPI,
    entities::{NewVehicle, Vehicle, VehicleUpdate},
    error::{invalid_input_error, not_found_error, Error},
};

#[async_trait]
impl VehicleAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_vehicle(&self, params: NewVehicle) -> Result<Vehicle, Error> {
        if params.plate.trim().is_empty() {
            return Err(invalid_input_error());
        }

        let vehicle = Vehicle::new(params);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("INSERT INTO vehicles (id, driver_id, data) VALUES ($1, $2, $3)")
                .bind(&vehicle.id)
                .bind(&vehicle.driver_id)
                .bind(Json(&vehicle)),
        )
        .await?;

        Ok(vehicle)
    }

    #[tracing::instrument(skip(self))]
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query("SELECT data FROM vehicles"))
            .await?;

        let mut vehicles = Vec::with_capacity(rows.len());
        for row in rows {
            let Json(vehicle) = row.try_get("data")?;
            vehicles.push(vehicle);
        }

        Ok(vehicles)
    }

    #[tracing::instrument(skip(self))]
    async fn find_vehicle(&self, id: Uuid) -> Result<Vehicle, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM vehicles WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(|| not_found_error("vehicle", &id))?;
        let Json(vehicle) = result.try_get("data")?;

        Ok(vehicle)
    }

    #[tracing::instrument(skip(self))]
    async fn update_vehicle(&self, id: Uuid, update: VehicleUpdate) -> Result<Vehicle, Error> {
        let mut vehicle = self.find_vehicle(id).await?;
        vehicle.apply(update);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("UPDATE vehicles SET driver_id = $2, data = $3 WHERE id = $1")
                .bind(&vehicle.id)
                .bind(&vehicle.driver_id)
                .bind(Json(&vehicle)),
        )
        .await?;

        Ok(vehicle)
    }

    #[tracing::instrument(skip(self))]
    async fn remove_vehicle(&self, id: Uuid) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(sqlx::query("DELETE FROM vehicles WHERE id = $1").bind(&id))
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("vehicle", &id));
        }

        Ok(())
    }
}
