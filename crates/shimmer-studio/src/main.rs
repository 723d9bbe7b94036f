//! Renders a shimmer sweep to a sequence of PNG frames.
//!
//! ```text
//! shimmer-studio [--preset card.toml] [--out frames] [--frames 24] [--size 320x96] [--log debug]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use shimmer_engine::logging::{LoggingConfig, init_logging};
use shimmer_ui::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "shimmer-studio", about = "Render a shimmer sweep to PNG frames")]
struct Options {
    /// TOML preset to load instead of the default alpha shimmer.
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Directory the frames are written to.
    #[arg(long, default_value = "shimmer-frames")]
    out: PathBuf,

    /// Number of frames across one sweep.
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..))]
    frames: u32,

    /// Frame size as `WxH`.
    #[arg(long, default_value = "320x96", value_parser = parse_size)]
    size: Size,

    /// Log filter, e.g. `debug` or `shimmer_engine=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Size {
    width: u32,
    height: u32,
}

/// Parses `WxH`.
fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("size {s:?} is not WxH"))?;
    let width: u32 = w.trim().parse().map_err(|_| format!("bad width in {s:?}"))?;
    let height: u32 = h.trim().parse().map_err(|_| format!("bad height in {s:?}"))?;
    if width == 0 || height == 0 {
        return Err(format!("size {s:?} has a zero dimension"));
    }
    Ok(Size { width, height })
}

fn load_config(preset: Option<&Path>) -> Result<ShimmerConfig> {
    let Some(path) = preset else {
        return Ok(ShimmerConfig::default());
    };
    let preset = ShimmerPreset::load(path)?;
    let config = preset
        .to_config()
        .with_context(|| format!("preset {} is invalid", path.display()))?;
    info!("loaded preset {}", path.display());
    Ok(config)
}

/// A list-item skeleton: avatar, title line and two body lines.
fn card(width: f32, height: f32) -> Placeholder {
    let grey = Color::from_straight(0.78, 0.78, 0.80, 1.0);
    let pad = 12.0;
    let avatar = (height - 2.0 * pad).max(0.0);
    let text_x = pad + avatar + pad;
    let text_w = (width - text_x - pad).max(0.0);
    let line_h = (avatar / 5.0).max(1.0);

    Placeholder::new(grey)
        .bar(Rect::new(pad, pad, avatar, avatar))
        .bar(Rect::new(text_x, pad, text_w * 0.6, line_h))
        .bar(Rect::new(text_x, pad + 2.0 * line_h, text_w, line_h))
        .bar(Rect::new(text_x, pad + 4.0 * line_h, text_w * 0.8, line_h))
}

fn render(opts: &Options, config: ShimmerConfig) -> Result<()> {
    std::fs::create_dir_all(&opts.out)
        .with_context(|| format!("failed to create {}", opts.out.display()))?;

    let Size { width, height } = opts.size;
    let (w, h) = (width as f32, height as f32);
    let mut layout = ShimmerLayout::new(card(w, h));
    layout.set_config(Some(config));
    layout.layout(Rect::from_size(w, h));

    let background = Color::from_straight(1.0, 1.0, 1.0, 1.0);
    let mut raster = Raster::new(width, height);
    let last = opts.frames.saturating_sub(1).max(1) as f32;

    for i in 0..opts.frames {
        layout.set_static_progress(i as f32 / last);

        raster.clear(background);
        layout.dispatch_draw(&mut raster);

        let path = opts.out.join(format!("frame_{i:03}.png"));
        let image = image::RgbaImage::from_raw(width, height, raster.to_rgba8())
            .context("raster size does not match image size")?;
        image
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    info!("wrote {} frames to {}", opts.frames, opts.out.display());
    Ok(())
}

fn main() -> Result<()> {
    let opts = Options::parse();
    init_logging(
        opts.log
            .as_deref()
            .map_or_else(LoggingConfig::default, LoggingConfig::with_filter),
    );

    if opts.frames == 1 {
        warn!("a single frame only shows the start of the sweep");
    }

    let config = load_config(opts.preset.as_deref())?;
    render(&opts, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &str) -> Result<Options, clap::Error> {
        Options::try_parse_from(std::iter::once("shimmer-studio").chain(args.split_whitespace()))
    }

    #[test]
    fn parses_all_flags() {
        let opts = parse("--preset p.toml --out dir --frames 5 --size 64x32 --log debug").unwrap();
        assert_eq!(opts.preset, Some(PathBuf::from("p.toml")));
        assert_eq!(opts.out, PathBuf::from("dir"));
        assert_eq!(opts.frames, 5);
        assert_eq!(opts.size, Size { width: 64, height: 32 });
        assert_eq!(opts.log.as_deref(), Some("debug"));
    }

    #[test]
    fn defaults_without_flags() {
        let opts = parse("").unwrap();
        assert_eq!(opts.frames, 24);
        assert_eq!(opts.out, PathBuf::from("shimmer-frames"));
        assert_eq!(opts.size, Size { width: 320, height: 96 });
        assert!(opts.preset.is_none());
        assert!(opts.log.is_none());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("--frames").is_err());
        assert!(parse("--frames 0").is_err());
        assert!(parse("--size 10by10").is_err());
        assert!(parse("--size 0x10").is_err());
        assert!(parse("--speed 3").is_err());
    }

    #[test]
    fn size_accepts_either_separator_case() {
        assert_eq!(parse_size("8X4"), Ok(Size { width: 8, height: 4 }));
        assert!(parse_size("8x").is_err());
    }

    #[test]
    fn options_are_well_formed() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }

    #[test]
    fn card_fits_inside_size() {
        for bar in card(320.0, 96.0).bars() {
            assert!(bar.origin.x >= 0.0 && bar.origin.y >= 0.0);
            assert!(bar.max().x <= 320.0 && bar.max().y <= 96.0);
        }
    }
}
