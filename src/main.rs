use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::configuration::Configuration;
use crate::configuration_handler::ConfigurationHandler;
use crate::database_interface::DatabaseInterface;
use crate::http::create_app;
use crate::local_slots::LocalSlots;

mod backend;
mod configuration;
mod configuration_handler;
mod database_interface;
mod error;
mod http;
mod local_slots;
mod notifications;
mod schema;
mod service;
#[cfg(test)]
mod testutils;
mod types;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("################");
    println!("# Slot Booking #");
    println!("################");

    let configuration = ConfigurationHandler::parse_arguments();

    let address = format!("0.0.0.0:{}", configuration.port());
    println!("Reachable at:\n{address}");
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap();

    let app = if let Some(database_url) = configuration.database_url() {
        let store = loop {
            match DatabaseInterface::new(&database_url) {
                Ok(store) => {
                    info!("Successfully connected to database");
                    break store;
                }
                Err(err) => {
                    error!(?err, "Failed to establish database connection. Retry in 1 sec. You may want to restart without --database-url (impersistent slots).");
                    sleep(Duration::from_secs(1)).await;
                }
            }
        };
        create_app(store, configuration)
    } else {
        let store = LocalSlots::default();
        create_app(store, configuration)
    };

    axum::serve(listener, app).await.unwrap();
}
