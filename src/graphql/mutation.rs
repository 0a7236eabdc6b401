use std::sync::Arc;

use async_graphql::{Context, ID, Object, Result};

use crate::store::{Message, MessageInput, MessageStore};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_message(
        &self,
        ctx: &Context<'_>,
        input: Option<MessageInput>,
    ) -> Result<Message> {
        let store = ctx.data::<Arc<MessageStore>>()?;
        Ok(store.create(input.unwrap_or_default()))
    }

    async fn update_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: Option<MessageInput>,
    ) -> Result<Message> {
        let store = ctx.data::<Arc<MessageStore>>()?;
        Ok(store.update(id.as_str(), input.unwrap_or_default())?)
    }
}
