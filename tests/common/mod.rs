#![allow(dead_code)]

use cumulus::{blocking, client, Config};
use cumulus_server::Handle;

pub const TOKEN: &str = "test-token";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn stub() -> Handle {
    init_tracing();
    cumulus_server::spawn(TOKEN).expect("failed to spawn stub server")
}

pub fn config(server: &Handle) -> Config {
    server.config(TOKEN)
}

pub fn blocking_client(server: &Handle) -> blocking::Client {
    blocking::Client::new(config(server)).expect("failed to build client")
}

pub fn async_client(server: &Handle) -> client::Client {
    client::Client::new(config(server)).expect("failed to build client")
}
