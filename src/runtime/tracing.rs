/// Initializes the tracing/logging infrastructure.
///
/// Verbosity comes from `RUST_LOG`:
/// - `RUST_LOG=info` - resource setup and store start/shutdown
/// - `RUST_LOG=debug` - one line per handled dispatch
/// - `RUST_LOG=trace` - also ignored and unhandled actions
/// - `RUST_LOG=resource_reducer::reducer=debug` - reducer only
///
/// The compact format prints span fields inline and hides module paths;
/// every event already carries a `resource` field.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
