//! Wire types shared between the ARA Travels dashboard and its REST API.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod system;
