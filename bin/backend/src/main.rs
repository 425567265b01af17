//! Card Table Backend Binary
//!
//! Serves room WebSockets and the health probe.
//! Runs on BIND_ADDR (e.g. 0.0.0.0:1999).

#[tokio::main]
async fn main() {
    ct_core::log();
    ct_core::kys();
    ct_server::run().await.unwrap();
}
