#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::style::Color;
use grid_life::ascii_art::{AsciiArtConfig, Brightness, load_image, to_ascii, write_ascii};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "asciiart")]
#[command(version, about = "Print an image as coloured ASCII art")]
struct Cli {
    /// Image to convert
    #[arg(short, long)]
    file: PathBuf,

    /// Text colour
    #[arg(short, long, default_value = "white")]
    color: TextColor,

    /// Swap dark and bright
    #[arg(short, long)]
    inv: bool,

    /// How pixel channels combine into brightness
    #[arg(short, long, default_value = "luminosity")]
    mode: Mode,

    /// Output width in characters
    #[arg(long, default_value_t = 240)]
    columns: u32,

    /// Output height in lines
    #[arg(long, default_value_t = 320)]
    lines: u32,

    /// Convert at the image's own resolution
    #[arg(long, conflicts_with_all = ["columns", "lines"])]
    native: bool,
}

#[derive(Clone, ValueEnum)]
enum TextColor {
    White,
    Green,
    Red,
    Blue,
}

impl From<TextColor> for Color {
    fn from(color: TextColor) -> Self {
        match color {
            TextColor::White => Color::White,
            TextColor::Green => Color::Green,
            TextColor::Red => Color::Red,
            TextColor::Blue => Color::Blue,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Mean of the three channels
    Average,
    /// Midpoint of the brightest and darkest channel
    Lightness,
    /// Perceptually weighted channels
    Luminosity,
}

impl From<Mode> for Brightness {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Average => Brightness::Average,
            Mode::Lightness => Brightness::Lightness,
            Mode::Luminosity => Brightness::Luminosity,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AsciiArtConfig::default()
        .brightness(cli.mode.into())
        .invert(cli.inv)
        .color(cli.color.into());
    config = if cli.native {
        config.keep_size()
    } else {
        config.size(cli.columns, cli.lines)
    };

    let image = load_image(&cli.file)?;
    let lines = to_ascii(&image, &config);
    info!(lines = lines.len(), "converted image");
    write_ascii(&mut io::stdout().lock(), &lines, &config)
        .context("failed to write ASCII art")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use crossterm::style::Color;
    use grid_life::ascii_art::Brightness;

    use super::Cli;

    #[test]
    fn short_flags_select_colour_mode_and_inversion() {
        let args = ["asciiart", "-f", "cat.png", "-c", "green", "-i", "-m", "average"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.file.to_str(), Some("cat.png"));
        assert!(cli.inv);
        assert_eq!(Color::from(cli.color), Color::Green);
        assert_eq!(Brightness::from(cli.mode), Brightness::Average);
    }

    #[test]
    fn defaults_and_rejected_values() {
        let cli = Cli::try_parse_from(["asciiart", "--file", "cat.png"]).unwrap();
        assert_eq!(Color::from(cli.color), Color::White);
        assert_eq!(Brightness::from(cli.mode), Brightness::Luminosity);
        assert_eq!((cli.columns, cli.lines), (240, 320));
        assert!(!cli.inv && !cli.native);

        assert!(Cli::try_parse_from(["asciiart", "-f", "cat.png", "-c", "purple"]).is_err());
        assert!(Cli::try_parse_from(["asciiart", "-f", "cat.png", "-m", "median"]).is_err());
        assert!(Cli::try_parse_from(["asciiart"]).is_err());
    }
}
