//! Serve command - run the HTTP API server.

use crate::cli::Output;
use crate::config::Settings;
use crate::openai::is_api_key_configured;
use crate::pipeline::Pipeline;
use crate::server::router;
use tracing::info;

/// Run the HTTP API server.
pub async fn run_serve(host: Option<String>, port: Option<u16>, settings: Settings) -> anyhow::Result<()> {
    let mut server_settings = settings.server.clone();
    if let Some(host) = host {
        server_settings.host = host;
    }
    if let Some(port) = port {
        server_settings.port = port;
    }

    let pipeline = Pipeline::new(&settings)?;
    let app = router(pipeline, &server_settings);

    let addr = format!("{}:{}", server_settings.host, server_settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    Output::header("tldw API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Status", "GET  /api/summarize");
    Output::kv("Summarize", "POST /api/summarize");
    println!();
    if !is_api_key_configured() {
        Output::warning("OPENAI_API_KEY is not set; summarize requests will fail.");
    }
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}
