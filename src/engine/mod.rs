mod clients_api;
mod drivers_api;
mod routing_api;
mod transports_api;
mod users_api;
mod vehicles_api;

use sqlx::{Executor, Pool, Postgres};

use crate::{api::API, error::Error, notifications::Notifier};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    notifier: Notifier,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>, notifier: Notifier) -> Result<Self, Error> {
        // TODO: move this to migrations
        pool.execute(
            "CREATE TABLE IF NOT EXISTS clients (id UUID PRIMARY KEY, removed_at TIMESTAMPTZ, data JSONB NOT NULL)",
        )
        .await?;
        pool.execute(
            "CREATE TABLE IF NOT EXISTS drivers (id UUID PRIMARY KEY, removed_at TIMESTAMPTZ, data JSONB NOT NULL)",
        )
        .await?;
        pool.execute(
            "CREATE TABLE IF NOT EXISTS vehicles (id UUID PRIMARY KEY, driver_id UUID, data JSONB NOT NULL)",
        )
        .await?;
        pool.execute(
            "CREATE TABLE IF NOT EXISTS transports (id UUID PRIMARY KEY, code VARCHAR UNIQUE NOT NULL, status VARCHAR NOT NULL, data JSONB NOT NULL)",
        )
        .await?;
        pool.execute("CREATE TABLE IF NOT EXISTS users (id UUID PRIMARY KEY, data JSONB NOT NULL)")
            .await?;

        Ok(Self { pool, notifier })
    }
}

impl API for Engine {}
