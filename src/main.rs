//! CSR entry point. Trunk builds this binary for `wasm32-unknown-unknown`
//! with the `csr` feature; the featureless build is a no-op so native
//! `cargo test` stays wasm-free.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(confessions_client::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
