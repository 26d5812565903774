use anyhow::Context;
use card_atlas_core::{AtlasConfig, render_atlas, write_atlas};
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cfg = AtlasConfig::default();
    debug!(config = %serde_json::to_string(&cfg)?, "atlas configuration");

    let out = render_atlas(&cfg).context("render card sheet")?;
    write_atlas(&out, &cfg).with_context(|| format!("write {}", cfg.output_path.display()))?;

    info!(
        path = %cfg.output_path.display(),
        cards = out.sheet.frames.len(),
        width = out.rgba.width(),
        height = out.rgba.height(),
        "generated card atlas"
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .try_init();
}
