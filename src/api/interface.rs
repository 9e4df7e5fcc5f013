use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{
    Client, ClientUpdate, DocumentsUpdate, Driver, DriverProfile, DriverUpdate, NewClient,
    NewDriver, NewTransport, NewUser, NewVehicle, Route, Transport, TransportUpdate, User,
    UserUpdate, Vehicle, VehicleUpdate,
};
use crate::error::Error;

#[async_trait]
pub trait ClientAPI {
    async fn create_client(&self, params: NewClient, actor: Uuid) -> Result<Client, Error>;
    async fn list_clients(&self) -> Result<Vec<Client>, Error>;
    async fn find_client(&self, id: Uuid) -> Result<Client, Error>;
    async fn update_client(
        &self,
        id: Uuid,
        update: ClientUpdate,
        actor: Uuid,
    ) -> Result<Client, Error>;
    async fn remove_client(&self, id: Uuid, actor: Uuid) -> Result<(), Error>;
}

#[async_trait]
pub trait DriverAPI {
    async fn create_driver(&self, params: NewDriver, actor: Uuid) -> Result<Driver, Error>;
    async fn list_drivers(&self) -> Result<Vec<DriverProfile>, Error>;
    async fn find_driver(&self, id: Uuid) -> Result<DriverProfile, Error>;
    async fn update_driver(
        &self,
        id: Uuid,
        update: DriverUpdate,
        actor: Uuid,
    ) -> Result<Driver, Error>;
    async fn remove_driver(&self, id: Uuid, actor: Uuid) -> Result<(), Error>;
    async fn assign_vehicle(&self, driver_id: Uuid, vehicle_id: Uuid)
        -> Result<DriverProfile, Error>;
    async fn update_driver_documents(
        &self,
        id: Uuid,
        update: DocumentsUpdate,
        actor: Uuid,
    ) -> Result<Driver, Error>;
}

#[async_trait]
pub trait VehicleAPI {
    async fn create_vehicle(&self, params: NewVehicle) -> Result<Vehicle, Error>;
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error>;
    async fn find_vehicle(&self, id: Uuid) -> Result<Vehicle, Error>;
    async fn update_vehicle(&self, id: Uuid, update: VehicleUpdate) -> Result<Vehicle, Error>;
    async fn remove_vehicle(&self, id: Uuid) -> Result<(), Error>;
}

#[async_trait]
pub trait TransportAPI {
    async fn create_transport(&self, params: NewTransport) -> Result<Transport, Error>;
    async fn list_transports(&self) -> Result<Vec<Transport>, Error>;
    async fn find_transport(&self, id: Uuid) -> Result<Transport, Error>;
    async fn update_transport(
        &self,
        id: Uuid,
        update: TransportUpdate,
    ) -> Result<Transport, Error>;
    async fn remove_transport(&self, id: Uuid) -> Result<(), Error>;
}

#[async_trait]
pub trait UserAPI {
    async fn create_user(&self, params: NewUser) -> Result<User, Error>;
    async fn list_users(&self) -> Result<Vec<User>, Error>;
    async fn find_user(&self, id: Uuid) -> Result<User, Error>;
    async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User, Error>;
    async fn remove_user(&self, id: Uuid) -> Result<(), Error>;
    async fn block_user(&self, id: Uuid, reason: Option<String>) -> Result<User, Error>;
    async fn unblock_user(&self, id: Uuid) -> Result<User, Error>;
    async fn ban_user(&self, id: Uuid, reason: Option<String>) -> Result<User, Error>;
    async fn unban_user(&self, id: Uuid) -> Result<User, Error>;
}

#[async_trait]
pub trait RoutingAPI {
    /// Geocodes origin, stops, and destination, then computes the route
    /// visiting them in the caller's order.
    async fn calculate_route(
        &self,
        origin: String,
        destination: String,
        stops: Vec<String>,
    ) -> Result<Route, Error>;
}

pub trait API:
    ClientAPI + DriverAPI + VehicleAPI + TransportAPI + UserAPI + RoutingAPI
{
}

pub type DynAPI = Arc<dyn API + Send + Sync>;
