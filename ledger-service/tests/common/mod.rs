use std::sync::Arc;

use auth::TokenIssuer;
use chrono::Duration;
use ledger_service::domain::account::service::AuthService;
use ledger_service::inbound::http::router::create_router;
use ledger_service::outbound::gateways::ChainGateway;
use ledger_service::outbound::repositories::InMemoryAccountDirectory;
use serde_json::json;

const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let directory = Arc::new(InMemoryAccountDirectory::new());
        let auth_service = Arc::new(AuthService::new(
            directory,
            TokenIssuer::new(TEST_JWT_SECRET, Duration::minutes(30)),
        ));
        let chain_gateway = Arc::new(ChainGateway::new());

        let router = create_router(auth_service, chain_gateway);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        // Signs with the server's secret, for forging expired or custom tokens
        let token_issuer = TokenIssuer::new(TEST_JWT_SECRET, Duration::minutes(30));

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_issuer,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Register an account and return the raw response
    pub async fn register(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/register")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the raw response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and extract the access token
    pub async fn login_token(&self, email: &str, password: &str) -> String {
        let body: serde_json::Value = self
            .login(email, password)
            .await
            .json()
            .await
            .expect("Failed to parse login response");
        body["data"]["access_token"]
            .as_str()
            .expect("Login response carried no access token")
            .to_string()
    }
}
