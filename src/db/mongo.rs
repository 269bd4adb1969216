use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion},
    Client, Collection, IndexModel,
};
use std::sync::Arc;
use std::time::Duration;

use crate::models::{plan::Plan, user::User};

pub async fn create_mongo_client(uri: &str) -> mongodb::error::Result<Arc<Client>> {
    log::info!("Connecting to MongoDB");

    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    // Stable API for MongoDB 5.0+
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;

    match client
        .database("admin")
        .run_command(doc! {"ping": 1})
        .await
    {
        Ok(_) => log::info!("Connected to MongoDB and verified with ping"),
        Err(e) => {
            log::warn!("Connected to MongoDB but ping failed: {}", e);
            log::warn!("The API will start, requests touching the database may fail");
        }
    }

    Ok(Arc::new(client))
}

/// Typed access to the collections of one database.
#[derive(Clone)]
pub struct Db {
    client: Arc<Client>,
    name: String,
}

impl Db {
    pub fn new(client: Arc<Client>, name: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn users(&self) -> Collection<User> {
        self.client.database(&self.name).collection("Users")
    }

    pub fn plans(&self) -> Collection<Plan> {
        self.client.database(&self.name).collection("Plans")
    }

    pub async fn ping(&self) -> mongodb::error::Result<()> {
        self.client
            .database(&self.name)
            .run_command(doc! {"ping": 1})
            .await
            .map(|_| ())
    }

    pub async fn ensure_indexes(&self) -> mongodb::error::Result<()> {
        let unique_email = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users().create_index(unique_email).await?;

        let by_owner = IndexModel::builder()
            .keys(doc! { "user_id": 1, "updated_at": -1 })
            .build();
        self.plans().create_index(by_owner).await?;

        log::info!("MongoDB indexes ensured on {}", self.name);
        Ok(())
    }
}
