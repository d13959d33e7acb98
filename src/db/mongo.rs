use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use std::sync::Arc;
use std::time::Duration;

/// Creates the MongoDB client, or `None` when the database is unreachable.
/// Nothing on the itinerary path touches the database, so a failed
/// connection limits functionality (the /health check) instead of aborting.
pub async fn create_mongo_client(uri: &str) -> Option<Arc<Client>> {
    println!("Connecting to MongoDB: {}", uri);

    let mut client_options = match ClientOptions::parse(uri).await {
        Ok(options) => options,
        Err(e) => {
            eprintln!("MongoDB connection failed (Functionality Limited): {}", e);
            return None;
        }
    };

    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    // Set the server API if using MongoDB 5.0+
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = match Client::with_options(client_options) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("MongoDB connection failed (Functionality Limited): {}", e);
            return None;
        }
    };

    // Test the connection to make sure it works
    match client
        .database("tourTrack")
        .run_command(mongodb::bson::doc! {"ping": 1})
        .await
    {
        Ok(_) => println!("MongoDB connected"),
        Err(e) => {
            eprintln!("WARNING: MongoDB client created but ping test failed: {}", e);
            eprintln!("The API still works; /health will report the database as degraded");
        }
    }

    Some(Arc::new(client))
}
