pub mod interface;
pub mod server;

pub use interface::{
    ClientAPI, DriverAPI, DynAPI, RoutingAPI, TransportAPI, UserAPI, VehicleAPI, API,
};
pub use server::serve;
