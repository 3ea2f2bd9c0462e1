use std::sync::OnceLock;

use mongodb::{Client, Database};

static DATABASE: OnceLock<Database> = OnceLock::new();

pub struct MongoDB;

impl MongoDB {
    /// Called once from main before the server starts accepting requests.
    pub async fn init() -> Result<(), String> {
        let uri = std::env::var("MONGODB_URI")
            .map_err(|_| "MONGODB_URI not set".to_string())?;

        let db_name = std::env::var("MONGODB_DATABASE")
            .unwrap_or_else(|_| "campushub".to_string());

        let client = Client::with_uri_str(&uri)
            .await
            .map_err(|error| error.to_string())?;

        let _ = DATABASE.set(client.database(&db_name));

        Ok(())
    }

    pub fn connect(&self) -> Database {
        DATABASE
            .get()
            .cloned()
            .expect("MongoDB::init must run before connect")
    }
}
