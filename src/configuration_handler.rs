use clap::Parser;

use crate::configuration::Configuration;

#[derive(Debug, Clone, Parser)]
#[command(about = "Appointment slot booking server")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on.
    #[arg(long, default_value = "8000")]
    port: String,

    /// Postgres connection string. Without one (here or in the
    /// DATABASE_URL environment variable) slots are kept in memory.
    #[arg(long)]
    database_url: Option<String>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        dotenvy::dotenv().ok();
        let mut configuration = Self::parse();
        if configuration.database_url.is_none() {
            configuration.database_url = std::env::var("DATABASE_URL").ok();
        }
        configuration
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> String {
        self.port.clone()
    }

    fn database_url(&self) -> Option<String> {
        self.database_url.clone()
    }

    // Placeholder credentials, kept only so the login contract can be
    // exercised against the frontend.
    // TODO: replace with a real credential store before exposing this
    // server anywhere that matters.
    fn admin_username(&self) -> String {
        "admin".into()
    }

    fn admin_password(&self) -> String {
        "admin".into()
    }

    fn access_token(&self) -> String {
        "admin-session-token".into()
    }
}
