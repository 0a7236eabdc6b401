mod mutation;
mod query;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use std::net::IpAddr;
use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::store::MessageStore;

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Source address of the current request, stashed in per-request context
/// data by the HTTP handler so the `ip` query can read it back.
#[derive(Debug, Clone, Copy)]
pub struct ClientAddr(pub IpAddr);

pub fn build_schema(store: Arc<MessageStore>) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
