pub mod activity;
pub mod activity_type;
pub mod client;
pub mod driver;
pub mod site;
pub mod suggestion;
pub mod trade_document;
pub mod vehicle;
