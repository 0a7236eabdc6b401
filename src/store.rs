use std::collections::BTreeMap;
use std::sync::Mutex;

use async_graphql::{ID, InputObject, SimpleObject};
use rand::Rng;

#[derive(Debug, Clone, SimpleObject)]
pub struct Message {
    pub id: ID,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// What the caller sends for create/update. Both fields optional, nothing
/// validated; an empty input is a legal message with no content.
#[derive(Debug, Clone, Default, InputObject)]
pub struct MessageInput {
    pub content: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no message exists with id {0}")]
    NotFound(String),
}

/// In-memory message store. Lives for the whole process, gone on restart.
///
/// The mutex is there because axum runs handlers on a multi-threaded
/// runtime; every operation is a single lock-and-go step, so this is the
/// only synchronization the store needs. Keyed by id in a BTreeMap, which
/// keeps `list` deterministic for any given set of inserts.
#[derive(Default)]
pub struct MessageStore {
    inner: Mutex<BTreeMap<String, MessageInput>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `input` under a freshly generated id. Never fails; collision
    /// odds on 10 random bytes are negligible and not handled.
    pub fn create(&self, input: MessageInput) -> Message {
        let id = fresh_id();
        let mut map = self.inner.lock().unwrap();
        let message = assemble(&id, &input);
        map.insert(id, input);
        message
    }

    pub fn get(&self, id: &str) -> Result<Message, StoreError> {
        let map = self.inner.lock().unwrap();
        map.get(id)
            .map(|body| assemble(id, body))
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))
    }

    pub fn list(&self) -> Vec<Message> {
        let map = self.inner.lock().unwrap();
        map.iter().map(|(id, body)| assemble(id, body)).collect()
    }

    /// Full overwrite. Fields missing from `input` end up cleared, not
    /// carried over from the old record.
    pub fn update(&self, id: &str, input: MessageInput) -> Result<Message, StoreError> {
        let mut map = self.inner.lock().unwrap();
        match map.get_mut(id) {
            Some(slot) => {
                *slot = input;
                Ok(assemble(id, slot))
            }
            None => Err(StoreError::NotFound(id.to_owned())),
        }
    }
}

fn assemble(id: &str, body: &MessageInput) -> Message {
    Message {
        id: ID(id.to_owned()),
        content: body.content.clone(),
        author: body.author.clone(),
    }
}

/// 10 random bytes as 20 hex chars. ThreadRng is cryptographically secure,
/// which is all the uniqueness this store relies on.
fn fresh_id() -> String {
    let bytes: [u8; 10] = rand::rng().random();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(content: Option<&str>, author: Option<&str>) -> MessageInput {
        MessageInput {
            content: content.map(str::to_owned),
            author: author.map(str::to_owned),
        }
    }

    #[test]
    fn created_message_reads_back_identically() {
        let store = MessageStore::new();
        let created = store.create(input(Some("hi"), Some("A")));

        assert_eq!(created.id.as_str().len(), 20);
        assert_eq!(created.content.as_deref(), Some("hi"));
        assert_eq!(created.author.as_deref(), Some("A"));

        let fetched = store.get(created.id.as_str()).unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.content, created.content);
        assert_eq!(fetched.author, created.author);
    }

    #[test]
    fn missing_id_reports_not_found_with_the_id() {
        let store = MessageStore::new();
        let err = store.get("deadbeef").unwrap_err();
        assert_eq!(err.to_string(), "no message exists with id deadbeef");

        let err = store.update("deadbeef", MessageInput::default()).unwrap_err();
        assert_eq!(err.to_string(), "no message exists with id deadbeef");
    }

    #[test]
    fn update_overwrites_instead_of_merging() {
        let store = MessageStore::new();
        let created = store.create(input(Some("old"), Some("A")));

        let updated = store
            .update(created.id.as_str(), input(Some("new"), None))
            .unwrap();
        assert_eq!(updated.content.as_deref(), Some("new"));
        assert_eq!(updated.author, None);

        let fetched = store.get(created.id.as_str()).unwrap();
        assert_eq!(fetched.author, None, "author must be cleared, not kept");
    }

    #[test]
    fn list_returns_every_message_and_empty_store_is_empty() {
        let store = MessageStore::new();
        assert!(store.list().is_empty());

        let a = store.create(input(Some("a"), Some("A")));
        let b = store.create(input(Some("b"), None));

        let all = store.list();
        assert_eq!(all.len(), 2);
        let find = |id: &ID| all.iter().find(|m| &m.id == id).unwrap();
        assert_eq!(find(&a.id).content.as_deref(), Some("a"));
        assert_eq!(find(&a.id).author.as_deref(), Some("A"));
        assert_eq!(find(&b.id).content.as_deref(), Some("b"));
        assert_eq!(find(&b.id).author, None);
    }

    #[test]
    fn ids_never_collide_across_a_thousand_creates() {
        let store = MessageStore::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let msg = store.create(MessageInput::default());
            let id = msg.id.to_string();
            assert!(seen.insert(id.clone()), "duplicate id {id}");
        }
    }

    #[test]
    fn empty_input_is_a_valid_message() {
        let store = MessageStore::new();
        let msg = store.create(MessageInput::default());
        assert_eq!(msg.content, None);
        assert_eq!(msg.author, None);
        assert!(store.get(msg.id.as_str()).is_ok());
    }
}
