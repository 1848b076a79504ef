// Entry point for `cargo run -p web-server`: load settings, start logging, serve.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = configuration::load_config()?;
    let _guard = configuration::init_logging(&settings.logging)?;
    web_server::run_server(settings).await
}
