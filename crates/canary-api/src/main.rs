//! Binary entrypoint for the canary web service.
use canary_api::run;
use canary_store::MemoryStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Defaults can be overridden with CANARY_ADDR / CANARY_SEED
    let addr = std::env::var("CANARY_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());
    let store = match std::env::var("CANARY_SEED") {
        Ok(path) => MemoryStore::load_json(&path).expect("Failed to load seed snapshot"),
        Err(_) => MemoryStore::new(),
    };
    run(&addr, store).await;
}
