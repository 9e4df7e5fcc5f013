use super::Engine;

use async_trait::async_trait;
use serde_json::json;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::DriverAPI,
    entities::{
        DocumentsUpdate, Driver, DriverProfile, DriverUpdate, NewDriver, Vehicle, VehicleUpdate,
    },
    error::{invalid_input_error, not_found_error, Error},
};

impl Engine {
    // the bare driver row, without its vehicles
    pub(super) async fn fetch_driver(&self, id: Uuid) -> Result<Driver, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query("SELECT data FROM drivers WHERE id = $1 AND removed_at IS NULL")
                    .bind(&id),
            )
            .await?;

        let result = maybe_result.ok_or_else(|| not_found_error("driver", &id))?;
        let Json(driver) = result.try_get("data")?;

        Ok(driver)
    }

    async fn driver_vehicles(&self, driver_id: Uuid) -> Result<Vec<Vehicle>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query("SELECT data FROM vehicles WHERE driver_id = $1").bind(&driver_id))
            .await?;

        let mut vehicles = Vec::with_capacity(rows.len());
        for row in rows {
            let Json(vehicle) = row.try_get("data")?;
            vehicles.push(vehicle);
        }

        Ok(vehicles)
    }

    async fn store_driver(&self, driver: &Driver) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("UPDATE drivers SET removed_at = $2, data = $3 WHERE id = $1")
                .bind(&driver.id)
                .bind(&driver.removed_at)
                .bind(Json(driver)),
        )
        .await?;

        Ok(())
    }
}

#[async_trait]
impl DriverAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_driver(&self, params: NewDriver, actor: Uuid) -> Result<Driver, Error> {
        if params.name.trim().is_empty() || params.license_number.trim().is_empty() {
            return Err(invalid_input_error());
        }

        let driver = Driver::new(params, actor);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("INSERT INTO drivers (id, data) VALUES ($1, $2)")
                .bind(&driver.id)
                .bind(Json(&driver)),
        )
        .await?;

        self.notifier.notify("DRIVER_CREATED", json!(&driver));

        Ok(driver)
    }

    #[tracing::instrument(skip(self))]
    async fn list_drivers(&self) -> Result<Vec<DriverProfile>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query(
                "SELECT data FROM drivers WHERE removed_at IS NULL",
            ))
            .await?;

        let mut drivers: Vec<Driver> = Vec::with_capacity(rows.len());
        for row in rows {
            let Json(driver) = row.try_get("data")?;
            drivers.push(driver);
        }

        let mut profiles = Vec::with_capacity(drivers.len());
        for driver in drivers {
            let vehicles = self.driver_vehicles(driver.id).await?;
            profiles.push(DriverProfile { driver, vehicles });
        }

        Ok(profiles)
    }

    #[tracing::instrument(skip(self))]
    async fn find_driver(&self, id: Uuid) -> Result<DriverProfile, Error> {
        let driver = self.fetch_driver(id).await?;
        let vehicles = self.driver_vehicles(id).await?;

        Ok(DriverProfile { driver, vehicles })
    }

    #[tracing::instrument(skip(self))]
    async fn update_driver(
        &self,
        id: Uuid,
        update: DriverUpdate,
        actor: Uuid,
    ) -> Result<Driver, Error> {
        let mut driver = self.fetch_driver(id).await?;
        driver.apply(update, actor);

        self.store_driver(&driver).await?;
        self.notifier.notify("DRIVER_UPDATED", json!(&driver));

        Ok(driver)
    }

    #[tracing::instrument(skip(self))]
    async fn remove_driver(&self, id: Uuid, actor: Uuid) -> Result<(), Error> {
        let mut driver = self.fetch_driver(id).await?;
        driver.remove(actor);

        self.store_driver(&driver).await?;
        self.notifier.notify("DRIVER_REMOVED", json!({ "id": id }));

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn assign_vehicle(
        &self,
        driver_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<DriverProfile, Error> {
        use crate::api::VehicleAPI;

        self.fetch_driver(driver_id).await?;

        let mut vehicle = self.find_vehicle(vehicle_id).await?;
        vehicle.apply(VehicleUpdate {
            driver_id: Some(driver_id),
            ..Default::default()
        });

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("UPDATE vehicles SET driver_id = $2, data = $3 WHERE id = $1")
                .bind(&vehicle.id)
                .bind(&vehicle.driver_id)
                .bind(Json(&vehicle)),
        )
        .await?;

        let profile = self.find_driver(driver_id).await?;
        self.notifier.notify(
            "DRIVER_VEHICLE_ASSIGNED",
            json!({ "driver_id": driver_id, "vehicle_id": vehicle_id }),
        );

        Ok(profile)
    }

    #[tracing::instrument(skip(self))]
    async fn update_driver_documents(
        &self,
        id: Uuid,
        update: DocumentsUpdate,
        actor: Uuid,
    ) -> Result<Driver, Error> {
        let mut driver = self.fetch_driver(id).await?;
        driver.apply_documents(update, actor);

        self.store_driver(&driver).await?;
        self.notifier
            .notify("DRIVER_DOCUMENTS_UPDATED", json!(&driver));

        Ok(driver)
    }
}
