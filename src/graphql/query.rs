use std::sync::Arc;

use async_graphql::{Context, ID, Object, Result};

use crate::die::RandomDie;
use crate::store::{Message, MessageStore};

use super::ClientAddr;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn get_die(&self, num_sides: Option<i32>) -> RandomDie {
        RandomDie::new(num_sides)
    }

    async fn get_message(&self, ctx: &Context<'_>, id: ID) -> Result<Message> {
        let store = ctx.data::<Arc<MessageStore>>()?;
        Ok(store.get(id.as_str())?)
    }

    async fn get_messages(&self, ctx: &Context<'_>) -> Result<Vec<Message>> {
        let store = ctx.data::<Arc<MessageStore>>()?;
        Ok(store.list())
    }

    async fn ip(&self, ctx: &Context<'_>) -> Result<String> {
        let addr = ctx.data::<ClientAddr>()?;
        Ok(addr.0.to_string())
    }
}
