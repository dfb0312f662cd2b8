/// League persistence backends and the store abstraction.
pub mod league_store;
/// Persisted entity definitions.
pub mod models;
/// Backend-agnostic storage errors.
pub mod storage;
