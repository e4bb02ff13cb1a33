use anyhow::Result;
use clap::Parser;
use garden_snake::game::GameConfig;
use garden_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "garden_snake")]
#[command(version, about = "Terminal Snake with good apples, bad apples and stones")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "32")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "24")]
    height: usize,

    /// Good apples kept on the field (each one eaten grows the snake)
    #[arg(long, default_value = "1")]
    good_apples: usize,

    /// Bad apples kept on the field (each one eaten shrinks the snake)
    #[arg(long, default_value = "2")]
    bad_apples: usize,

    /// Stones kept on the field (deadly on contact)
    #[arg(long, default_value = "3")]
    stones: usize,

    /// Milliseconds per game tick (125 = 8 ticks per second)
    #[arg(long, default_value = "125")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.width, cli.height);
    config.good_apple_count = cli.good_apples;
    config.bad_apple_count = cli.bad_apples;
    config.stone_count = cli.stones;

    let mut mode = HumanMode::new(config, cli.tick_ms);
    mode.run().await?;

    Ok(())
}
