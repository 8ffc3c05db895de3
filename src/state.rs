// src/state.rs
use crate::store::Store;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Store,
}

// Permite extrair o store diretamente nos handlers
impl axum::extract::FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Store {
        state.store.clone()
    }
}
