// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The state store: projects, chat history, and the admin session.
//!
//! All three collections live in memory and are mirrored to the key-value
//! store after every successful mutation, each under its own key. There is
//! no transaction spanning keys; a failed write leaves the in-memory state
//! ahead of disk until the next successful write of that key.
//!
//! Mutations run one at a time by construction: the store is owned by a
//! single `Arc<Mutex<_>>` and every caller holds the lock for the full
//! mutate-then-persist step.

use std::sync::Arc;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use codehub_core::{
    Admin, ChatMessage, CodehubError, KvStore, Project, KEY_AUTH, KEY_MESSAGES, KEY_PROJECTS,
};

use crate::seed;

/// Shared handle to the single mutable store.
pub type SharedStore = Arc<Mutex<HubStore>>;

/// The two monotonically non-decreasing engagement counters.
#[derive(Debug, Clone, Copy)]
enum Counter {
    Likes,
    Downloads,
}

/// In-memory + persisted holder of projects, messages, and session.
pub struct HubStore {
    kv: Arc<dyn KvStore>,
    projects: Vec<Project>,
    messages: Vec<ChatMessage>,
    session: Option<Admin>,
}

impl HubStore {
    /// Load all three collections from the key-value store.
    ///
    /// A missing key or undecodable value falls back to the built-in default
    /// for that collection (starter catalog, single welcome message, no
    /// session). Load failures are logged and never surface to the caller.
    pub async fn load(kv: Arc<dyn KvStore>) -> Self {
        let projects = read_or_default(kv.as_ref(), KEY_PROJECTS, seed::initial_projects).await;
        let messages =
            read_or_default(kv.as_ref(), KEY_MESSAGES, || vec![seed::welcome_message()]).await;
        let session = read_or_default(kv.as_ref(), KEY_AUTH, || None).await;

        Self {
            kv,
            projects,
            messages,
            session,
        }
    }

    /// Wrap the store in the shared handle the responder and views use.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    // --- Read accessors ---

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects whose name or language contains `query` (case-insensitive),
    /// newest first. An empty query returns the whole catalog in display
    /// order.
    pub fn search(&self, query: &str) -> Vec<Project> {
        let needle = query.to_lowercase();
        let mut hits: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.language.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        hits
    }

    /// Projects shared by the given admin, in collection order.
    pub fn projects_by_author(&self, author_id: &str) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn session(&self) -> Option<&Admin> {
        self.session.as_ref()
    }

    // --- Mutations ---

    /// Increment the like counter of the project with `id`. Unknown ids are
    /// a silent no-op; callers are expected to pass ids they obtained from
    /// this store.
    pub async fn like_project(&mut self, id: &str) {
        self.bump_counter(id, Counter::Likes).await;
    }

    /// Increment the download counter of the project with `id`. Unknown ids
    /// are a silent no-op.
    pub async fn record_download(&mut self, id: &str) {
        self.bump_counter(id, Counter::Downloads).await;
    }

    async fn bump_counter(&mut self, id: &str, counter: Counter) {
        if !self.projects.iter().any(|p| p.id == id) {
            debug!(id, "counter bump for unknown project id, ignoring");
            return;
        }
        self.projects = self
            .projects
            .iter()
            .cloned()
            .map(|mut p| {
                if p.id == id {
                    match counter {
                        Counter::Likes => p.likes += 1,
                        Counter::Downloads => p.downloads += 1,
                    }
                }
                p
            })
            .collect();
        self.persist(KEY_PROJECTS, &self.projects).await;
    }

    /// Prepend a project to the catalog. Front of the list means most
    /// recently added, independent of `created_at`.
    pub async fn add_project(&mut self, project: Project) {
        debug!(id = %project.id, name = %project.name, "project added");
        self.projects.insert(0, project);
        self.persist(KEY_PROJECTS, &self.projects).await;
    }

    /// Remove the project with `id` if present; the collection is persisted
    /// either way.
    pub async fn delete_project(&mut self, id: &str) {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            debug!(id, "delete for unknown project id, collection unchanged");
        }
        self.persist(KEY_PROJECTS, &self.projects).await;
    }

    /// Append a message to the chat history.
    pub async fn post_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.persist(KEY_MESSAGES, &self.messages).await;
    }

    /// Replace the session. `Some` persists the admin record under the auth
    /// key; `None` removes the key.
    pub async fn set_session(&mut self, admin: Option<Admin>) {
        match admin {
            Some(admin) => {
                debug!(username = %admin.username, "session opened");
                self.session = Some(admin);
                self.persist(KEY_AUTH, &self.session).await;
            }
            None => {
                debug!("session cleared");
                self.session = None;
                if let Err(e) = self.kv.remove(KEY_AUTH).await {
                    warn!(key = KEY_AUTH, error = %e, "failed to remove persisted session");
                }
            }
        }
    }

    /// Replace the session's admin record and persist only the auth key.
    /// The canonical admin list is never rewritten, so a fresh login still
    /// sees the original record.
    pub async fn update_session_admin(&mut self, admin: Admin) {
        self.session = Some(admin);
        self.persist(KEY_AUTH, &self.session).await;
    }

    /// Serialize `value` and write it under `key`. Write failures are logged
    /// and swallowed: the in-memory state stays authoritative and diverges
    /// from disk until the next successful write.
    async fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize collection, skipping write");
                return;
            }
        };
        if let Err(e) = self.kv.set(key, &json).await {
            warn!(key, error = %e, "persistence write failed, continuing with in-memory state");
        }
    }
}

async fn read_or_default<T, F>(kv: &dyn KvStore, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match kv.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                let err = CodehubError::Corrupt {
                    key: key.to_string(),
                    source: e,
                };
                warn!(key, error = %err, "falling back to defaults");
                default()
            }
        },
        Ok(None) => {
            debug!(key, "no persisted value, seeding defaults");
            default()
        }
        Err(e) => {
            warn!(key, error = %e, "storage read failed, falling back to defaults");
            default()
        }
    }
}

/// Random 9-character base36 project id. Matches the inherited id format;
/// uniqueness is not guaranteed.
pub fn new_project_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use codehub_core::ProjectType;
    use codehub_storage::MemoryKv;

    fn make_project(id: &str, name: &str, created_at: i64) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            language: "Rust".to_string(),
            kind: ProjectType::Code,
            content: "fn main() {}".to_string(),
            notes: None,
            preview_url: "https://picsum.photos/id/1/800/400".to_string(),
            likes: 0,
            downloads: 0,
            author_id: "silverhold-1".to_string(),
            created_at,
        }
    }

    async fn empty_store() -> (Arc<MemoryKv>, HubStore) {
        let kv = Arc::new(MemoryKv::new());
        let store = HubStore::load(kv.clone()).await;
        (kv, store)
    }

    #[tokio::test]
    async fn load_seeds_defaults_when_storage_is_empty() {
        let (_kv, store) = empty_store().await;
        assert_eq!(store.projects().len(), 2);
        assert_eq!(store.messages().len(), 1);
        assert_eq!(store.messages()[0].sender, "System");
        assert!(store.session().is_none());
    }

    #[tokio::test]
    async fn load_falls_back_on_corrupt_json() {
        let kv = Arc::new(MemoryKv::new());
        kv.set(KEY_PROJECTS, "{not json").await.unwrap();
        kv.set(KEY_MESSAGES, "42").await.unwrap();

        let store = HubStore::load(kv).await;
        assert_eq!(store.projects().len(), 2, "corrupt projects -> starter catalog");
        assert_eq!(store.messages().len(), 1, "corrupt messages -> welcome message");
    }

    #[tokio::test]
    async fn load_restores_persisted_session() {
        let kv = Arc::new(MemoryKv::new());
        let admin = crate::seed::builtin_admins().remove(0);
        kv.set(KEY_AUTH, &serde_json::to_string(&Some(admin.clone())).unwrap())
            .await
            .unwrap();

        let store = HubStore::load(kv).await;
        assert_eq!(store.session().map(|a| a.id.as_str()), Some("silverhold-1"));
    }

    #[tokio::test]
    async fn like_increments_exactly_one_project_by_one() {
        let (_kv, mut store) = empty_store().await;
        let before: Vec<Project> = store.projects().to_vec();

        store.like_project("p1").await;

        let p1 = store.project("p1").unwrap();
        assert_eq!(p1.likes, before[0].likes + 1);
        assert_eq!(p1.downloads, before[0].downloads);
        assert_eq!(store.project("p2").unwrap(), &before[1]);
    }

    #[tokio::test]
    async fn like_unknown_id_is_a_silent_no_op() {
        let (_kv, mut store) = empty_store().await;
        let before: Vec<Project> = store.projects().to_vec();
        store.like_project("nope").await;
        assert_eq!(store.projects(), &before[..]);
    }

    #[tokio::test]
    async fn download_counter_is_independent_of_likes() {
        let (_kv, mut store) = empty_store().await;
        store.record_download("p2").await;
        store.record_download("p2").await;
        let p2 = store.project("p2").unwrap();
        assert_eq!(p2.downloads, 14);
        assert_eq!(p2.likes, 89);
    }

    #[tokio::test]
    async fn add_project_prepends_and_persists() {
        let (kv, mut store) = empty_store().await;
        let p = make_project("fresh", "Fresh", 1);
        store.add_project(p.clone()).await;
        assert_eq!(store.projects()[0], p);

        // A second store loaded from the same kv sees the new project first.
        let reloaded = HubStore::load(kv).await;
        assert_eq!(reloaded.projects()[0], p);
    }

    #[tokio::test]
    async fn delete_removes_project_and_unknown_id_changes_nothing() {
        let (_kv, mut store) = empty_store().await;
        store.delete_project("p1").await;
        assert!(store.project("p1").is_none());

        let before: Vec<Project> = store.projects().to_vec();
        store.delete_project("p1").await;
        assert_eq!(store.projects(), &before[..]);
    }

    #[tokio::test]
    async fn delete_persists_even_when_nothing_was_removed() {
        let (kv, mut store) = empty_store().await;
        store.delete_project("nope").await;
        assert!(
            kv.get(KEY_PROJECTS).await.unwrap().is_some(),
            "delete writes the collection regardless"
        );
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_newest_first() {
        let (_kv, mut store) = empty_store().await;
        store.add_project(make_project("p3", "Rustls Pinning", 99)).await;

        let hits = store.search("rust");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p3");

        let all = store.search("");
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn projects_by_author_filters_by_id() {
        let (_kv, store) = empty_store().await;
        let mine = store.projects_by_author("silverhold-1");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "p2");
        assert!(store.projects_by_author("ghost").is_empty());
    }

    #[tokio::test]
    async fn post_message_appends_in_insertion_order() {
        let (kv, mut store) = empty_store().await;
        let msg = ChatMessage {
            id: "m2".to_string(),
            sender: "USER7".to_string(),
            text: "hi".to_string(),
            is_admin: false,
            timestamp: 1,
        };
        store.post_message(msg.clone()).await;
        assert_eq!(store.messages().last(), Some(&msg));

        let reloaded = HubStore::load(kv).await;
        assert_eq!(reloaded.messages().len(), 2);
        assert_eq!(reloaded.messages()[1], msg);
    }

    #[tokio::test]
    async fn set_session_persists_and_clearing_removes_the_key() {
        let (kv, mut store) = empty_store().await;
        let admin = crate::seed::builtin_admins().remove(0);

        store.set_session(Some(admin)).await;
        assert!(kv.get(KEY_AUTH).await.unwrap().is_some());

        store.set_session(None).await;
        assert!(store.session().is_none());
        assert!(kv.get(KEY_AUTH).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_session_admin_touches_only_the_auth_key() {
        let (kv, mut store) = empty_store().await;
        let mut admin = crate::seed::builtin_admins().remove(0);
        store.set_session(Some(admin.clone())).await;
        let projects_before = kv.get(KEY_PROJECTS).await.unwrap();

        admin.name = "Renamed".to_string();
        store.update_session_admin(admin).await;

        assert_eq!(store.session().unwrap().name, "Renamed");
        assert_eq!(kv.get(KEY_PROJECTS).await.unwrap(), projects_before);
        let auth_raw = kv.get(KEY_AUTH).await.unwrap().unwrap();
        assert!(auth_raw.contains("Renamed"));
    }

    #[tokio::test]
    async fn projects_round_trip_through_storage_in_order() {
        let (kv, mut store) = empty_store().await;
        store.add_project(make_project("p3", "Third", 3)).await;
        let before: Vec<Project> = store.projects().to_vec();
        drop(store);

        let reloaded = HubStore::load(kv).await;
        assert_eq!(reloaded.projects(), &before[..]);
    }

    #[test]
    fn new_project_id_is_nine_base36_chars() {
        let id = new_project_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(new_project_id(), new_project_id());
    }
}
