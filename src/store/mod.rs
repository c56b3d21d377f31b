pub mod extract;
pub mod store_client;
