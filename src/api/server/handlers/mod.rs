pub mod clients;
pub mod drivers;
pub mod notifications;
pub mod routing;
pub mod transports;
pub mod users;
pub mod vehicles;
