//! todo-api server binary
//!
//! Serves the todo collection over HTTP, backed by MongoDB.
//!
//! Environment variables:
//! - `TODO_API_HOST`: bind address (default: 127.0.0.1)
//! - `TODO_API_PORT`: bind port (default: 3000)
//! - `MONGODB_URI`: store connection string
//!   (default: mongodb://localhost:27017/todo-tdd)
//! - `RUST_LOG`: log filter (default: todo_api=info)

use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use todo_api::api;
use todo_api::config::Config;
use todo_api::store::MongoStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let store = MongoStore::connect(&config).await?;

    // The driver connects lazily; probe once at startup so a missing
    // deployment is visible in the logs. The server still comes up and
    // requests fail individually until the store is reachable.
    match store.ping().await {
        Ok(()) => info!("connected to the document store"),
        Err(err) => {
            error!("error connecting to MongoDB");
            error!("{err}");
        }
    }

    api::start_server(&config, store).await?;
    Ok(())
}
