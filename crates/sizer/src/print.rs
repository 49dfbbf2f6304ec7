// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;

use sizer_core::{EdgeThickness, Geometry, Handle, HandleStyle, MinSize, ResizeController, Size, Target};

/// Everything a host needs to draw and hit-test the overlay.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub geometry: Geometry,
    pub min_size: MinSize,
    pub overlay: Size,
    pub thickness: EdgeThickness,
    pub free_positioning: bool,
    pub handles: &'a [Handle],
    pub style: &'a HandleStyle,
}

impl<'a> Snapshot<'a> {
    pub fn of<T: Target>(overlay: &'a ResizeController<T>) -> Self {
        Self {
            geometry: overlay.geometry(),
            min_size: overlay.min_size(),
            overlay: overlay.overlay_size(),
            thickness: overlay.thickness(),
            free_positioning: overlay.is_free_positioning(),
            handles: overlay.handles(),
            style: overlay.style(),
        }
    }
}

pub fn print_json<T: Target>(overlay: &ResizeController<T>) -> Result<(), String> {
    let text = serde_json::to_string_pretty(&Snapshot::of(overlay))
        .map_err(|e| format!("failed to encode snapshot: {e}"))?;
    println!("{text}");
    Ok(())
}

pub fn format_geometry(g: &Geometry) -> String {
    format!("x={} y={} {}x{}", num(g.x), num(g.y), num(g.width), num(g.height))
}

pub fn print_handles(handles: &[Handle]) {
    for h in handles {
        let state = if h.exists { "present" } else { "absent" };
        let kind = if h.role.is_corner() { "corner" } else { "edge" };
        println!(
            "{:<13} {:<6} {:<8} {}",
            h.role.as_str(),
            kind,
            state,
            h.cursor().name()
        );
    }
}

pub fn print_layout(handles: &[Handle], overlay: Size, style: &HandleStyle) {
    for h in handles.iter().filter(|h| h.exists) {
        let r = h.rect;
        println!(
            "  {:<13} @ ({}, {}) {}x{}",
            h.role.as_str(),
            num(r.x),
            num(r.y),
            num(r.w),
            num(r.h)
        );
    }
    println!("  overlay {}x{}", num(overlay.width), num(overlay.height));
    println!(
        "  fill 0x{:08X} border 0x{:08X} {}px",
        style.fill_with_opacity(),
        style.border_colour,
        num(style.border_width)
    );
}

/// Trims float noise so `120.00000000000001` prints as `120`.
fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".into();
    }
    format!("{rounded}")
}
