pub mod die;
pub mod graphql;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router, debug_handler,
    extract::{ConnectInfo, Request, State},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
};

use graphql::{ApiSchema, ClientAddr};
use store::MessageStore;

/// Everything lives under one path: GET serves the GraphiQL console,
/// POST runs queries and mutations.
pub fn app(store: Arc<MessageStore>) -> Router {
    let schema = graphql::build_schema(store);

    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .with_state(schema)
        .layer(middleware::from_fn(log_client))
}

async fn log_client(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    println!("ip: {}", addr.ip());
    next.run(req).await
}

#[debug_handler]
async fn graphql_handler(
    State(schema): State<ApiSchema>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let req = req.into_inner().data(ClientAddr(addr.ip()));
    schema.execute(req).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
