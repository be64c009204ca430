pub mod database;
pub mod logging;
pub mod module;

pub(crate) fn env(key: &str) -> Option<String> {
    dotenvy::var(key).ok()
}
