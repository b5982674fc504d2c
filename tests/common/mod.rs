use reqwest::Client;
use server::config::Config;

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

/// Start a server on an ephemeral local port and return its base URL.
pub async fn spawn_server(max_sessions: usize) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let config = Config {
        host: addr.ip().to_string(),
        port: addr.port(),
        max_sessions,
    };
    tokio::spawn(server::run(listener, config));

    format!("http://{addr}")
}

/// Build a URL for an API endpoint.
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}
