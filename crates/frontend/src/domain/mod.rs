pub mod a001_user;
pub mod a002_vendor;
pub mod a003_driver;
pub mod a004_ride;
pub mod a005_pricing;
pub mod a006_employee;
