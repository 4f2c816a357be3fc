pub mod role;
pub mod ride_status;

pub use role::Role;
pub use ride_status::RideStatus;
