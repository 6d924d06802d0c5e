use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use std::sync::Arc;
use std::time::Duration;

/// The single database for this service: the venue catalog and the
/// day-plan store live in sibling collections here.
pub const DB_NAME: &str = "planmyday";

pub async fn create_mongo_client(uri: &str) -> Arc<Client> {
    println!("Connecting to MongoDB: {}", uri);

    let mut options = ClientOptions::parse(uri)
        .await
        .expect("MONGODB_URI is not a valid connection string");

    options.connect_timeout = Some(Duration::from_secs(10));
    options.server_selection_timeout = Some(Duration::from_secs(10));
    // Two small collections and an append-only write path; a handful of
    // pooled connections covers it.
    options.max_pool_size = Some(5);
    options.min_pool_size = Some(1);
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

    let client = Client::with_options(options).expect("Failed to create MongoDB client");

    match client
        .database(DB_NAME)
        .run_command(mongodb::bson::doc! {"ping": 1})
        .await
    {
        Ok(_) => println!("MongoDB connection verified with ping"),
        Err(e) => {
            eprintln!("WARNING: MongoDB ping failed: {}", e);
            eprintln!("Venue catalog and plan storage may be unavailable");
        }
    }

    Arc::new(client)
}
