//! Headless hex grid demo: sweeps the active hex slider and toggles destinations
//!
//! Usage: `hex_demo [config.toml|config.ron]`

use board_engine::config::{ConfigError, DemoConfig};
use board_engine::foundation::logging;
use board_engine::hex_grid::{HexGridPanel, DESTINATION_COUNT};

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
}

fn run(config: &DemoConfig) {
    let mut panel = HexGridPanel::new(&config.hex_grid);
    let (min, max) = panel.slider_range();
    log::info!(
        "{} hexes, slider {}..={}, mask u_scale {}",
        panel.table().len(),
        min,
        max,
        panel.params().mask_u_scale
    );

    for value in [0.0, 12.5, 13.0, 45.7, max] {
        let header = panel.set_slider(value).to_string();
        log::info!("{} -> active_hex_offset {:?}", header, panel.params().active_hex_offset);
    }

    for dest in (1..=DESTINATION_COUNT).step_by(2) {
        panel.set_destination_visible(dest, false);
    }
    log::info!("Destination visibility: {:?}", panel.params().dest_visible);
}

fn main() -> Result<(), DemoError> {
    logging::init();

    let path = std::env::args().nth(1);
    let config = DemoConfig::load_or_default(path.as_deref()).map_err(|e| {
        log::error!("Failed to load configuration: {}", e);
        DemoError::from(e)
    })?;
    logging::set_level(&config.logging.level);

    log::info!("Starting hex grid demo");
    run(&config);
    log::info!("Hex grid demo completed successfully");
    Ok(())
}
