//! Local LLM chat API backed by Ollama
//!
//! (c) Softlandia 2025

use local_chat_api::api;
use local_chat_api::core::services::InMemoryConversationService;
use local_chat_api::infrastructure::config::ChatSettings;
use local_chat_api::infrastructure::ollama::OllamaBackend;

use anyhow::anyhow;
use axum::Router;
use di::{Injectable, ServiceCollection};
use di_axum::RouterServiceProviderExtensions;
use log::info;
use tokio::runtime::{Builder, Runtime};

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;

    let web_task_handle = runtime.spawn(web_server_task());

    runtime.block_on(async { web_task_handle.await? })
}

async fn web_server_task() -> anyhow::Result<()> {
    let provider = ServiceCollection::new()
        .add(ChatSettings::singleton())
        .add(OllamaBackend::singleton())
        .add(InMemoryConversationService::singleton())
        .build_provider()
        .map_err(|e| anyhow!("invalid service configuration: {e:?}"))?;

    let settings = provider.get_required::<ChatSettings>();
    info!(
        "using model {} at {} (failed turns: {:?})",
        settings.model, settings.ollama_host, settings.failure_policy
    );

    let app = Router::new()
        .merge(api::chat::router())
        .layer(api::cors_layer())
        .with_provider(provider);

    let listener = tokio::net::TcpListener::bind(&settings.bind_address).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    info!("Shutting down...");

    Ok(())
}
