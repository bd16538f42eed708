// src/state.rs

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::store::QuestionStore;

pub type SharedStore = Arc<dyn QuestionStore>;
pub type SharedRng = Arc<Mutex<StdRng>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
    /// Random source for the quiz selector.
    pub rng: SharedRng,
}

impl AppState {
    /// Seeds the quiz RNG from `config.quiz_seed`, or from entropy when unset.
    pub fn new(store: SharedStore, config: Config) -> Self {
        let rng = match config.quiz_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            store,
            config,
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for SharedRng {
    fn from_ref(state: &AppState) -> Self {
        state.rng.clone()
    }
}
