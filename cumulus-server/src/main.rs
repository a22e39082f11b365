use std::net::SocketAddr;

use cumulus::{
    auth::AuthHeader,
    config::{DEFAULT_TOKEN, TOKEN_VAR},
};
use cumulus_server::{router, AppState};

const ADDR_VAR: &str = "CUMULUS_ADDR";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr: SocketAddr = std::env::var_os(ADDR_VAR)
        .map(|addr| {
            addr.into_string()
                .expect("Server address must be valid UTF-8")
        })
        .unwrap_or_else(|| "0.0.0.0:3000".to_string())
        .parse()
        .expect("Server address must be set via 'CUMULUS_ADDR' as host:port");
    let token = std::env::var_os(TOKEN_VAR)
        .and_then(|token| token.into_string().ok())
        .unwrap_or_else(|| DEFAULT_TOKEN.to_string());

    let app = router(AppState::new(AuthHeader::bearer(token)));

    tracing::info!(%addr, "listening");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
