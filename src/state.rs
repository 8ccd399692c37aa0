//! Application state: service config and the in-memory practice-session store.
//!
//! Sessions are pure values (see `session`); this module only decides where
//! they live. The store is bounded by `max_sessions` and evicts the least
//! recently used session first.

use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use rand::rngs::ThreadRng;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::{load_config_from_env, ServiceConfig};
use crate::domain::Tier;
use crate::session::Session;

/// `order` runs from least to most recently used.
#[derive(Default)]
struct SessionStore {
    by_id: HashMap<String, Session>,
    order: VecDeque<String>,
}

impl SessionStore {
    fn touch(&mut self, id: &str) {
        if let Some(pos) = self.order.iter().position(|x| x == id) {
            if let Some(key) = self.order.remove(pos) {
                self.order.push_back(key);
            }
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    sessions: Arc<RwLock<SessionStore>>,
    pub config: ServiceConfig,
}

impl AppState {
    /// Build state from env (ZAHLEN_CONFIG_PATH).
    #[instrument(level = "info", skip_all)]
    pub fn from_env() -> Self {
        let config = load_config_from_env();
        info!(target: "zahlen_backend", difficulty = %config.default_difficulty, max_sessions = config.max_sessions, "Application state ready");
        Self::with_config(config)
    }

    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(SessionStore::default())),
            config,
        }
    }

    /// Resolve an optional difficulty name, falling back to the configured default.
    pub fn difficulty_or_default(&self, requested: Option<Tier>) -> Tier {
        requested.unwrap_or(self.config.default_difficulty)
    }

    /// Start a new session with a fresh question and store it.
    #[instrument(level = "debug", skip(self), fields(%difficulty))]
    pub async fn start_session(&self, difficulty: Tier) -> Session {
        let session = {
            let mut rng = rand::thread_rng();
            Session::start(Uuid::new_v4().to_string(), difficulty, &mut rng)
        };

        let mut store = self.sessions.write().await;
        while store.by_id.len() >= self.config.max_sessions {
            let Some(oldest) = store.order.pop_front() else { break };
            store.by_id.remove(&oldest);
            debug!(target: "exercise", evicted = %oldest, "Session evicted (store full)");
        }
        store.order.push_back(session.id.clone());
        store.by_id.insert(session.id.clone(), session.clone());
        session
    }

    /// Read-only access to a session by id.
    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_session(&self, id: &str) -> Option<Session> {
        self.sessions.read().await.by_id.get(id).cloned()
    }

    /// Apply a transition to a stored session and keep the result.
    /// Returns `None` if the session is unknown.
    pub async fn update_session<T>(
        &self,
        id: &str,
        transition: impl FnOnce(Session, &mut ThreadRng) -> (Session, T),
    ) -> Option<(Session, T)> {
        let mut store = self.sessions.write().await;
        let current = store.by_id.remove(id)?;
        let (next, out) = {
            let mut rng = rand::thread_rng();
            transition(current, &mut rng)
        };
        store.by_id.insert(id.to_string(), next.clone());
        store.touch(id);
        Some((next, out))
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.by_id.len()
    }
}
