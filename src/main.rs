use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use snake_arcade::metrics::load_stats;
use snake_arcade::modes::PlayMode;
use snake_arcade::render::Theme;
use snake_arcade::settings::GameSettings;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Terminal Snake arcade game")]
struct Cli {
    /// Speed multiplier (1 = slowest, 5 = fastest)
    #[arg(long, default_value = "1")]
    speed: u32,

    /// Cell size in pixels on the 600px board; smaller cells mean a finer grid
    #[arg(long, default_value = "20")]
    cell_size: usize,

    /// Color theme
    #[arg(long, value_enum, default_value = "dark")]
    theme: Theme,

    /// Hide the dots on empty cells
    #[arg(long)]
    hide_grid: bool,

    /// Ring the terminal bell when food is eaten
    #[arg(long)]
    sound: bool,

    /// Where the arcade counters are stored
    #[arg(long, default_value = "snake_stats.json")]
    stats_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = GameSettings {
        speed: cli.speed,
        cell_size: cli.cell_size,
        theme: cli.theme,
        show_grid: !cli.hide_grid,
        sound_enabled: cli.sound,
    };
    settings.validate().map_err(anyhow::Error::msg)?;
    settings.to_config().validate().map_err(anyhow::Error::msg)?;

    let stats = load_stats(&cli.stats_file)?;

    let mut mode = PlayMode::new(settings, stats, cli.stats_file);
    mode.run().await
}
