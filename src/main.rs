use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::input::KeyBindings;
use grid_snake::logging;
use grid_snake::modes::{ArcadeMode, ClassicMode};
use grid_snake::render::Skin;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a grid, in a classic and an arcade flavour")]
struct Cli {
    /// Game variant
    #[arg(long, value_enum, default_value = "arcade")]
    mode: Mode,

    /// JSON config file; defaults to the chosen variant's preset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds per simulation tick
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// JSON glyph skin (arcade only)
    #[arg(long)]
    skin: Option<PathBuf>,

    /// Start with sound effects off (arcade only)
    #[arg(long)]
    mute: bool,

    /// Where to write the log
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Plain console board, one tick per frame
    Classic,
    /// Sprites, sound and a start screen
    Arcade,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let preset = match self.mode {
            Mode::Classic => GameConfig::classic(),
            Mode::Arcade => GameConfig::arcade(),
        };

        let mut config = GameConfig::load_or(self.config.as_deref(), preset)
            .context("Failed to load configuration")?;

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file, "info")?;

    // Everything that can fail is loaded before the first tick
    let config = cli.game_config()?;
    let bindings =
        KeyBindings::from_overrides(&config.bindings).context("Invalid key bindings")?;

    info!(
        mode = ?cli.mode,
        width = config.grid_width,
        height = config.grid_height,
        "starting"
    );

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Classic => {
            if cli.skin.is_some() || cli.mute {
                warn!("--skin and --mute only apply to arcade mode");
            }
            ClassicMode::new(config, bindings).run().await?;
        }
        Mode::Arcade => {
            let skin = match &cli.skin {
                Some(path) => Skin::load(path).context("Failed to load skin")?,
                None => Skin::default(),
            };
            ArcadeMode::new(config, skin, bindings)
                .muted(cli.mute)
                .run()
                .await?;
        }
    }

    info!("exiting");
    Ok(())
}
