// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simulated chat auto-responder.
//!
//! Posting a user message schedules exactly one deferred reply, picked
//! uniformly at random from the fixed pool and attributed to the first
//! built-in admin. Chat state is global, so the reply is applied even if
//! the view that posted the message is long gone; the cancellation token
//! suppresses pending replies only on process shutdown.

use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use codehub_core::ChatMessage;

use crate::seed;
use crate::store::SharedStore;

/// Canned replies the simulated admin picks from.
pub const REPLY_POOL: [&str; 4] = [
    "Sabar ya, admin lagi asik coding!",
    "Halo Legends! Ada yang bisa kami bantu?",
    "Project ini gratis kok, silahkan di download.",
    "Request project? Chat aja nanti kami cek.",
];

/// Random guest sender name, `USER0` through `USER999`.
pub fn guest_sender() -> String {
    format!("USER{}", rand::thread_rng().gen_range(0..1000))
}

/// Build a chat message from an anonymous visitor.
pub fn user_message(text: &str) -> ChatMessage {
    ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        sender: guest_sender(),
        text: text.to_string(),
        is_admin: false,
        timestamp: seed::now_ms(),
    }
}

/// Build the simulated admin reply.
fn admin_reply() -> ChatMessage {
    let reply = REPLY_POOL[rand::thread_rng().gen_range(0..REPLY_POOL.len())];
    ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        sender: seed::builtin_admins().remove(0).name,
        text: reply.to_string(),
        is_admin: true,
        timestamp: seed::now_ms(),
    }
}

/// Appends a simulated admin reply some time after each user post.
pub struct ChatResponder {
    store: SharedStore,
    delay: Duration,
    cancel: CancellationToken,
}

impl ChatResponder {
    pub fn new(store: SharedStore, delay: Duration) -> Self {
        Self {
            store,
            delay,
            cancel: CancellationToken::new(),
        }
    }

    /// Token that suppresses pending replies when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Append the visitor's message immediately and schedule the deferred
    /// reply. Returns the appended message and the reply task handle.
    pub async fn post(&self, text: &str) -> (ChatMessage, JoinHandle<()>) {
        let message = user_message(text);
        {
            let mut store = self.store.lock().await;
            store.post_message(message.clone()).await;
        }
        let handle = self.schedule_reply();
        (message, handle)
    }

    /// Schedule one simulated reply after the configured delay.
    fn schedule_reply(&self) -> JoinHandle<()> {
        let store = self.store.clone();
        let delay = self.delay;
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("shutdown before simulated reply, suppressing");
                }
                _ = tokio::time::sleep(delay) => {
                    let reply = admin_reply();
                    debug!(sender = %reply.sender, "posting simulated reply");
                    let mut store = store.lock().await;
                    store.post_message(reply).await;
                }
            }
        })
    }

    /// Cancel all pending replies.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::HubStore;
    use codehub_storage::MemoryKv;
    use std::sync::Arc;

    async fn make_responder(delay_ms: u64) -> (SharedStore, ChatResponder) {
        let store = HubStore::load(Arc::new(MemoryKv::new())).await.into_shared();
        let responder = ChatResponder::new(store.clone(), Duration::from_millis(delay_ms));
        (store, responder)
    }

    #[tokio::test]
    async fn post_appends_exactly_one_message_immediately() {
        let (store, responder) = make_responder(5_000).await;
        let (message, _handle) = responder.post("anyone here?").await;

        let store = store.lock().await;
        assert_eq!(store.messages().len(), 2); // welcome + user post
        assert_eq!(store.messages().last(), Some(&message));
        assert!(!message.is_admin);
        assert!(message.sender.starts_with("USER"));
    }

    #[tokio::test]
    async fn reply_arrives_after_the_delay() {
        let (store, responder) = make_responder(10).await;
        let (_message, handle) = responder.post("is this free?").await;
        handle.await.unwrap();

        let store = store.lock().await;
        assert_eq!(store.messages().len(), 3);
        let reply = store.messages().last().unwrap();
        assert!(reply.is_admin);
        assert_eq!(reply.sender, "SilverHold Official");
        assert!(REPLY_POOL.contains(&reply.text.as_str()));
    }

    #[tokio::test]
    async fn each_post_gets_exactly_one_reply() {
        let (store, responder) = make_responder(10).await;
        let (_m1, h1) = responder.post("first").await;
        let (_m2, h2) = responder.post("second").await;
        h1.await.unwrap();
        h2.await.unwrap();

        let store = store.lock().await;
        // welcome + 2 posts + 2 replies
        assert_eq!(store.messages().len(), 5);
        assert_eq!(store.messages().iter().filter(|m| m.is_admin).count(), 3);
    }

    #[tokio::test]
    async fn shutdown_suppresses_pending_replies() {
        let (store, responder) = make_responder(5_000).await;
        let (_message, handle) = responder.post("going down").await;
        responder.shutdown();
        handle.await.unwrap();

        let store = store.lock().await;
        assert_eq!(store.messages().len(), 2, "no reply after shutdown");
    }

    #[test]
    fn guest_sender_stays_in_range() {
        for _ in 0..100 {
            let sender = guest_sender();
            let n: u32 = sender.strip_prefix("USER").unwrap().parse().unwrap();
            assert!(n < 1000);
        }
    }
}
