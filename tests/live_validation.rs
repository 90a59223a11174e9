use std::{env, sync::Once};

use assistant_clients::{
    config::Settings,
    logging,
    todoist::TodoistClient,
    vector_store::{DEFAULT_TOP_K, VectorStore},
};

static INIT: Once = Once::new();

fn set_default_env(key: &str, value: &str) {
    let needs_value = env::var(key).map(|v| v.trim().is_empty()).unwrap_or(true);
    if needs_value {
        // SAFETY: Tests run serially via Once and we intentionally mutate process env.
        unsafe {
            env::set_var(key, value);
        }
    }
}

fn load_settings() -> Settings {
    INIT.call_once(|| {
        logging::init_tracing();
        set_default_env("QDRANT_URL", "http://127.0.0.1");
        set_default_env("QDRANT_PORT", "6333");
        set_default_env("QDRANT_INDEX_NAME", "documents");
        set_default_env("OPENAI_API_KEY", "unset");
        set_default_env("TODOIST_API_KEY", "unset");
        set_default_env("TODOIST_PROJECT", "Inbox");
    });
    Settings::from_env().expect("settings should load from environment")
}

#[tokio::test]
#[ignore = "Requires a live Todoist credential"]
async fn live_todoist_project_resolution() {
    let settings = load_settings();
    let client = TodoistClient::new(&settings.todoist.api_key, &settings.todoist.project)
        .expect("client construction");
    let project_id = client
        .find_project_id()
        .await
        .expect("configured project should exist");
    assert!(!project_id.is_empty(), "project id should be non-empty");
}

#[tokio::test]
#[ignore = "Requires live Qdrant and an OpenAI credential"]
async fn live_vector_store_search() {
    let settings = load_settings();
    let store =
        VectorStore::new(&settings.qdrant, &settings.openai).expect("store construction");
    let hits = store
        .search("smoke test query", DEFAULT_TOP_K)
        .await
        .expect("search against live collection");
    assert!(
        hits.len() <= DEFAULT_TOP_K,
        "search should honor the requested limit: {hits:?}"
    );
}
