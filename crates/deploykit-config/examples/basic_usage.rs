use deploykit_config::{ConfigLoader, PluginRegistry, ProcessEnv};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    deploykit_utils::init_logging()?;

    let mut registry = PluginRegistry::new();
    let config = ConfigLoader::new().load(&ProcessEnv, &mut registry)?;

    for extension in registry.registered() {
        tracing::info!(extension = %extension, "Extension active");
    }

    let active = config.default_network()?;
    match active.endpoint.url() {
        Some(url) => tracing::info!(network = active.name, %url, "Deploy target"),
        None => tracing::info!(network = active.name, "Deploy target is the local simulation"),
    }

    if let Some(path) = std::env::args().nth(1) {
        let from_file = ConfigLoader::new()
            .load_from_file(&path, &ProcessEnv, &mut registry)
            .await?;
        tracing::info!(path = %path, networks = ?from_file.network_names(), "Loaded configuration file");
    }

    Ok(())
}
