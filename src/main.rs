use std::path::PathBuf;

use anyhow::Context;
use ferris_view::{app::ViewerApp, config::ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let config = ViewerConfig::load(&path)
                .with_context(|| format!("loading {}", path.display()))?;
            log::info!("Loaded config from {}", path.display());
            config
        }
        None => ViewerConfig::default(),
    };

    ViewerApp::new(config)?.run()?;
    Ok(())
}
