// Author: Dustin Pilgrim
// License: MIT

use std::io::Read;
use std::path::Path;

use eventline::{debug, info, warn};

use sizer_core::ResizeController;

use crate::cli::{Args, Cmd};
use crate::config;
use crate::element::Element;
use crate::paths;
use crate::print::{format_geometry, print_handles, print_json, print_layout};
use crate::script::{self, Step};

pub fn run(args: Args) -> Result<(), String> {
    info!("starting sizer");
    debug!("parsed args: {:?}", args.cmd);

    let config_path = args.config.clone().unwrap_or_else(paths::default_config_path);
    debug!("config: {}", config_path.display());

    let mut cfg = config::load(&config_path)?;
    args.element.apply(&mut cfg);
    debug!("effective config: {:?}", cfg);

    let element = Element::from_config(&cfg);
    let mut overlay = ResizeController::with_style(element, cfg.thickness, cfg.style)
        .map_err(|e| format!("cannot attach overlay: {e}"))?;

    info!(
        "overlay attached: thickness={} min={}x{} free_positioning={}",
        overlay.thickness(),
        overlay.min_size().width,
        overlay.min_size().height,
        overlay.is_free_positioning()
    );

    match args.cmd {
        Cmd::Handles { json: true } | Cmd::Layout { json: true } => print_json(&overlay),

        Cmd::Handles { json: false } => {
            print_handles(overlay.handles());
            Ok(())
        }

        Cmd::Layout { json: false } => {
            println!("{}", format_geometry(&overlay.geometry()));
            let size = overlay.overlay_size();
            let style = *overlay.style();
            print_layout(overlay.layout(), size, &style);
            Ok(())
        }

        Cmd::Replay { script, layout } => {
            let src = read_script(script.as_deref())?;
            let lines = script::parse_script(&src)?;
            info!("replaying {} events", lines.len());

            println!("start: {}", format_geometry(&overlay.geometry()));

            for line in lines {
                let print_rects = match line.step {
                    Step::Drag {
                        role,
                        dx,
                        dy,
                        modifiers,
                    } => {
                        debug!("line {}: {} dx={} dy={} {:?}", line.number, role, dx, dy, modifiers);
                        match overlay.on_drag_delta(role, dx, dy, modifiers) {
                            Some(g) => println!("line {}: {}", line.number, format_geometry(&g)),
                            None => {
                                warn!("line {}: no {} handle on this overlay", line.number, role);
                                println!("line {}: {} absent, ignored", line.number, role);
                            }
                        }
                        layout
                    }

                    Step::Set {
                        x,
                        y,
                        width,
                        height,
                    } => {
                        let g = overlay.set_geometry(x, y, width, height);
                        println!("line {}: {}", line.number, format_geometry(&g));
                        layout
                    }

                    Step::Hit { x, y } => {
                        match overlay.hit_test(x, y) {
                            Some(role) => println!(
                                "line {}: ({x}, {y}) -> {} ({})",
                                line.number,
                                role,
                                role.cursor().name()
                            ),
                            None => println!("line {}: ({x}, {y}) -> none", line.number),
                        }
                        false
                    }

                    Step::Layout => true,
                };

                if print_rects {
                    let size = overlay.overlay_size();
                    let style = *overlay.style();
                    print_layout(overlay.layout(), size, &style);
                }
            }

            let element = overlay.detach();
            info!("replay done, {} repaints", element.repaints);
            Ok(())
        }
    }
}

fn read_script(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| format!("failed to read script {}: {e}", p.display())),
        _ => {
            let mut src = String::new();
            std::io::stdin()
                .read_to_string(&mut src)
                .map_err(|e| format!("failed to read script from stdin: {e}"))?;
            Ok(src)
        }
    }
}
