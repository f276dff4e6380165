//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod activity_type_repo;
pub mod availability_repo;
pub mod client_repo;
pub mod driver_repo;
pub mod site_repo;
pub mod trade_document_repo;
pub mod vehicle_repo;

pub use activity_repo::ActivityRepo;
pub use activity_type_repo::ActivityTypeRepo;
pub use availability_repo::AvailabilityRepo;
pub use client_repo::ClientRepo;
pub use driver_repo::DriverRepo;
pub use site_repo::SiteRepo;
pub use trade_document_repo::TradeDocumentRepo;
pub use vehicle_repo::VehicleRepo;
