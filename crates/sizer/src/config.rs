// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use clap::ValueEnum;
use rune_cfg::RuneConfig;
use sizer_core::{EdgeThickness, HandleStyle, Point, Size};

/// Where the simulated element lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Surface {
    /// Free-positioning parent: explicit (x, y).
    Canvas,
    /// Flow layout: position belongs to the parent.
    Flow,
    /// Not in any tree; attaching an overlay fails.
    Detached,
}

#[derive(Debug, Clone)]
pub struct SizerConfig {
    pub thickness: EdgeThickness,
    pub surface: Surface,
    pub size: Option<Size>,
    pub natural_size: Size,
    pub position: Option<Point>,
    pub min_size: Option<Size>,
    pub style: HandleStyle,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            thickness: EdgeThickness::default(),
            surface: Surface::Canvas,
            size: None,
            natural_size: Size::new(120.0, 80.0),
            position: None,
            min_size: None,
            style: HandleStyle::default(),
        }
    }
}

pub fn load(path: &Path) -> Result<SizerConfig, String> {
    if !path.exists() {
        return Ok(SizerConfig::default());
    }

    let rc = RuneConfig::from_file(path).map_err(|e| format!("failed to read config: {e}"))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<SizerConfig, String> {
    let mut cfg = SizerConfig::default();

    if !rc.has("sizer") {
        return Ok(cfg);
    }

    if let Some(s) = get_string(rc, "sizer.thickness")? {
        cfg.thickness = s
            .parse()
            .map_err(|e| format!("config error at sizer.thickness: {e}"))?;
    }

    if let Some(s) = get_string(rc, "sizer.surface")? {
        cfg.surface = parse_surface(&s).map_err(|e| format!("config error at sizer.surface: {e}"))?;
    }

    if let Some(s) = get_string(rc, "sizer.size")? {
        cfg.size = Some(parse_size(&s).map_err(|e| format!("config error at sizer.size: {e}"))?);
    }

    if let Some(s) = get_string(rc, "sizer.natural_size")? {
        cfg.natural_size =
            parse_size(&s).map_err(|e| format!("config error at sizer.natural_size: {e}"))?;
    }

    if let Some(s) = get_string(rc, "sizer.position")? {
        cfg.position =
            Some(parse_point(&s).map_err(|e| format!("config error at sizer.position: {e}"))?);
    }

    if let Some(s) = get_string(rc, "sizer.min_size")? {
        cfg.min_size =
            Some(parse_size(&s).map_err(|e| format!("config error at sizer.min_size: {e}"))?);
    }

    if let Some(s) = get_string(rc, "sizer.handle_colour")? {
        cfg.style.fill_colour =
            parse_hex_colour(&s).map_err(|e| format!("config error at sizer.handle_colour: {e}"))?;
    }

    if let Some(s) = get_string(rc, "sizer.border_colour")? {
        cfg.style.border_colour =
            parse_hex_colour(&s).map_err(|e| format!("config error at sizer.border_colour: {e}"))?;
    }

    if let Some(s) = get_string(rc, "sizer.handle_opacity")? {
        cfg.style.fill_opacity =
            parse_opacity(&s).map_err(|e| format!("config error at sizer.handle_opacity: {e}"))?;
    }

    Ok(cfg)
}

fn get_string(rc: &RuneConfig, key: &str) -> Result<Option<String>, String> {
    rc.get_optional::<String>(key)
        .map_err(|e| format!("config error at {key}: {e}"))
}

pub fn parse_surface(s: &str) -> Result<Surface, String> {
    match s.trim().to_lowercase().as_str() {
        "canvas" => Ok(Surface::Canvas),
        "flow" => Ok(Surface::Flow),
        "detached" => Ok(Surface::Detached),
        other => Err(format!("expected canvas|flow|detached, got \"{other}\"")),
    }
}

/// `"WxH"`, e.g. `"100x50"`. Both sides must be finite and non-negative.
pub fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got \"{s}\""))?;
    let w = parse_len(w)?;
    let h = parse_len(h)?;
    Ok(Size::new(w, h))
}

/// `"X,Y"`, e.g. `"10,10"`. Negative coordinates are fine.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .trim()
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got \"{s}\""))?;
    Ok(Point::new(parse_number(x)?, parse_number(y)?))
}

fn parse_len(s: &str) -> Result<f64, String> {
    let v = parse_number(s)?;
    if v < 0.0 {
        return Err(format!("length must not be negative, got {v}"));
    }
    Ok(v)
}

fn parse_number(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number \"{}\"", s.trim()))?;
    if !v.is_finite() {
        return Err(format!("number must be finite, got \"{}\"", s.trim()));
    }
    Ok(v)
}

fn parse_opacity(s: &str) -> Result<f64, String> {
    let v = parse_number(s)?;
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("opacity must be within 0..1, got {v}"));
    }
    Ok(v)
}

fn parse_hex_colour(s: &str) -> Result<u32, String> {
    let s = s.trim();

    let Some(hex) = s.strip_prefix('#') else {
        return Err("colour must start with #".into());
    };

    if hex.len() != 6 {
        return Err("colour must be 6 hex digits (RRGGBB)".into());
    }

    let rgb = u32::from_str_radix(hex, 16).map_err(|_| "invalid hex colour".to_string())?;

    Ok(0xFF00_0000 | rgb)
}
