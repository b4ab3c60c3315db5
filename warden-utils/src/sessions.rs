use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use crate::pagination::SearchSession;

/// Shared, individually locked session. Holding the lock for the whole
/// navigate-and-render step keeps clicks on one message strictly ordered.
pub type SessionHandle<T> = Arc<Mutex<SearchSession<T>>>;

/// Maps outbound message ids to the session that renders them.
#[derive(Debug)]
pub struct SessionBinder<T> {
    sessions: Arc<DashMap<u64, SessionHandle<T>>>,
}

impl<T> Clone for SessionBinder<T> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
        }
    }
}

impl<T> Default for SessionBinder<T> {
    fn default() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }
}

impl<T> SessionBinder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a session to a message, replacing any previous binding.
    pub fn bind(&self, message_id: u64, mut session: SearchSession<T>) -> SessionHandle<T> {
        session.set_owner_message(message_id);
        let handle = Arc::new(Mutex::new(session));

        if self
            .sessions
            .insert(message_id, Arc::clone(&handle))
            .is_some()
        {
            debug!(message_id, "replaced existing pagination session");
        }

        handle
    }

    /// Find the live session for a message.
    ///
    /// Expired sessions are evicted here and reported as absent.
    pub async fn resolve(&self, message_id: u64, now: Instant) -> Option<SessionHandle<T>> {
        let handle = self
            .sessions
            .get(&message_id)
            .map(|bound| Arc::clone(bound.value()))?;

        let mut session = handle.lock().await;
        if session.is_expired(now) {
            session.expire();
            drop(session);
            self.unbind_if_current(message_id, &handle);
            return None;
        }
        drop(session);

        Some(handle)
    }

    pub fn unbind(&self, message_id: u64) -> Option<SessionHandle<T>> {
        self.sessions.remove(&message_id).map(|(_, handle)| handle)
    }

    fn unbind_if_current(&self, message_id: u64, handle: &SessionHandle<T>) -> bool {
        self.sessions
            .remove_if(&message_id, |_, bound| Arc::ptr_eq(bound, handle))
            .is_some()
    }

    fn is_rebound(&self, message_id: u64, handle: &SessionHandle<T>) -> bool {
        self.sessions
            .get(&message_id)
            .is_some_and(|bound| !Arc::ptr_eq(bound.value(), handle))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sleep until the session has been idle for its full TTL, then mark it
    /// expired and release its binding.
    ///
    /// Returns `false` when the message was rebound to another session in
    /// the meantime, in which case the caller must leave the message alone.
    pub async fn expire_when_idle(&self, message_id: u64, handle: SessionHandle<T>) -> bool {
        loop {
            let deadline = handle.lock().await.expires_at();
            sleep_until(deadline).await;

            let mut session = handle.lock().await;
            if !session.is_expired(Instant::now()) {
                continue;
            }

            session.expire();
            drop(session);

            let rebound = self.is_rebound(message_id, &handle);
            self.unbind_if_current(message_id, &handle);
            debug!(message_id, rebound, "pagination session expired");

            return !rebound;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::time::{Instant, sleep};

    use super::SessionBinder;
    use crate::pagination::{Direction, SESSION_TTL, SearchSession};

    fn session(len: usize) -> SearchSession<usize> {
        SearchSession::create("query", (0..len).collect(), Instant::now()).unwrap()
    }

    #[tokio::test]
    async fn bound_session_resolves_by_message() {
        let binder = SessionBinder::new();
        let handle = binder.bind(10, session(12));

        let resolved = binder.resolve(10, Instant::now()).await.unwrap();
        assert!(Arc::ptr_eq(&handle, &resolved));
        assert_eq!(resolved.lock().await.owner_message(), Some(10));
        assert!(binder.resolve(11, Instant::now()).await.is_none());
    }

    #[tokio::test]
    async fn rebinding_replaces_the_association() {
        let binder = SessionBinder::new();
        let first = binder.bind(10, session(3));
        let second = binder.bind(10, session(30));

        let resolved = binder.resolve(10, Instant::now()).await.unwrap();
        assert!(Arc::ptr_eq(&second, &resolved));
        assert!(!Arc::ptr_eq(&first, &resolved));
        assert_eq!(binder.len(), 1);
    }

    #[tokio::test]
    async fn unbind_releases_the_session() {
        let binder = SessionBinder::new();
        binder.bind(10, session(3));

        assert!(binder.unbind(10).is_some());
        assert!(binder.resolve(10, Instant::now()).await.is_none());
        assert!(binder.is_empty());
    }

    #[tokio::test]
    async fn resolve_after_ttl_evicts_and_later_navigation_fails() {
        let binder = SessionBinder::new();
        let handle = binder.bind(10, session(12));
        let later = Instant::now() + SESSION_TTL;

        assert!(binder.resolve(10, later).await.is_none());
        assert!(binder.is_empty());

        let mut session = handle.lock().await;
        assert!(session.advance(Direction::Next, later).is_err());
        assert_eq!(session.current_page(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn watcher_expires_idle_session() {
        let binder = SessionBinder::new();
        let handle = binder.bind(10, session(12));
        let watcher = tokio::spawn({
            let binder = binder.clone();
            let handle = Arc::clone(&handle);
            async move { binder.expire_when_idle(10, handle).await }
        });

        sleep(SESSION_TTL - Duration::from_secs(1)).await;
        assert!(binder.resolve(10, Instant::now()).await.is_some());

        sleep(Duration::from_secs(2)).await;
        assert!(watcher.await.unwrap());
        assert!(binder.is_empty());
        assert!(handle.lock().await.controls_disabled());
    }

    #[tokio::test(start_paused = true)]
    async fn navigation_postpones_expiry() {
        let binder = SessionBinder::new();
        let handle = binder.bind(10, session(12));
        let watcher = tokio::spawn({
            let binder = binder.clone();
            let handle = Arc::clone(&handle);
            async move { binder.expire_when_idle(10, handle).await }
        });

        sleep(Duration::from_secs(200)).await;
        handle
            .lock()
            .await
            .advance(Direction::Next, Instant::now())
            .unwrap();

        sleep(Duration::from_secs(250)).await;
        assert!(binder.resolve(10, Instant::now()).await.is_some());
        assert!(!watcher.is_finished());

        sleep(Duration::from_secs(60)).await;
        assert!(watcher.await.unwrap());
        assert!(binder.resolve(10, Instant::now()).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_watcher_leaves_rebound_message_alone() {
        let binder = SessionBinder::new();
        let stale = binder.bind(10, session(12));
        let watcher = tokio::spawn({
            let binder = binder.clone();
            async move { binder.expire_when_idle(10, stale).await }
        });

        sleep(Duration::from_secs(100)).await;
        let fresh = binder.bind(10, session(12));

        sleep(SESSION_TTL - Duration::from_secs(50)).await;
        assert!(!watcher.await.unwrap());

        let resolved = binder.resolve(10, Instant::now()).await.unwrap();
        assert!(Arc::ptr_eq(&fresh, &resolved));
    }

    #[tokio::test]
    async fn clicks_on_one_message_apply_in_order() {
        let binder = SessionBinder::new();
        binder.bind(10, session(200));

        let clicks = (0..20).map(|_| {
            let binder = binder.clone();
            tokio::spawn(async move {
                let handle = binder.resolve(10, Instant::now()).await.unwrap();
                let mut session = handle.lock().await;
                let before = session.current_page();
                tokio::task::yield_now().await;
                let after = session.advance(Direction::Next, Instant::now()).unwrap();
                assert_eq!(after, before + 1);
            })
        });

        for click in clicks.collect::<Vec<_>>() {
            click.await.unwrap();
        }

        let handle = binder.resolve(10, Instant::now()).await.unwrap();
        assert_eq!(handle.lock().await.current_page(), 20);
    }
}
