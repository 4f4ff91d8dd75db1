use callscan::cli::{Cli, Commands};
use callscan::config::Config;
use callscan::notify::{format_test_message, ConsoleNotifier, Notifier};
use clap::Parser;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let telemetry = callscan::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Scan(args) => {
            args.execute(&config, Path::new(&cli.config), &telemetry)?;
        }
        Commands::Score(args) => {
            args.execute(&config)?;
        }
        Commands::NotifyTest => {
            ConsoleNotifier.send(&format_test_message())?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Indicators: RSI {}, MACD {}/{}/{}, Bollinger {}x{}, EMA {}/{}/{}, ATR {}",
                config.indicators.rsi_period,
                config.indicators.macd_fast,
                config.indicators.macd_slow,
                config.indicators.macd_signal,
                config.indicators.bollinger_period,
                config.indicators.bollinger_k,
                config.indicators.ema_short,
                config.indicators.ema_medium,
                config.indicators.ema_long,
                config.indicators.atr_period
            );
            println!(
                "  Scoring: min call {}, RSI {}/{}, volume spike {}x",
                config.scoring.min_call_score,
                config.scoring.rsi_oversold,
                config.scoring.rsi_overbought,
                config.scoring.volume_spike_factor
            );
            println!(
                "  Risk: stop {}x ATR, target {}x ATR",
                config.risk.stop_atr_mult, config.risk.target_atr_mult
            );
            println!("  Cooldown: {} min", config.cooldown.window_minutes);
            println!(
                "  Options: min score {}, high vol {}",
                config.options.min_score, config.options.high_vol_threshold
            );
            for asset in &config.assets {
                let options = if asset.options.is_some() { " +options" } else { "" };
                println!(
                    "  Asset: {} [{}] {}{}",
                    asset.id,
                    asset.category,
                    asset.bars.display(),
                    options
                );
            }
        }
    }

    Ok(())
}
