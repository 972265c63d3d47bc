pub mod conf;
pub mod es_client;
pub mod models;
