mod client;
mod driver;
mod route;
mod transport;
mod user;
mod vehicle;

pub use client::{Address, Client, ClientKind, ClientUpdate, NewClient};
pub use driver::{ApprovalStatus, DocumentsUpdate, Driver, DriverProfile, DriverUpdate, NewDriver};
pub use route::{Coordinates, Route};
pub use transport::{NewTransport, Transport, TransportKind, TransportStatus, TransportUpdate};
pub use user::{NewUser, User, UserUpdate, UserView};
pub use vehicle::{NewVehicle, Vehicle, VehicleUpdate};
