use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dicepost::store::MessageStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let bind_addr = dotenv::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".to_owned());

    let store = Arc::new(MessageStore::new());
    let app = dicepost::app(store);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    println!("Running a GraphQL API server at http://{bind_addr}/graphql");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
