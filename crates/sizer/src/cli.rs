// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sizer_core::{EdgeThickness, Point, Size};

use crate::config::{self, Surface};

#[derive(Debug, Parser)]
#[command(name = "sizer", version, about = "Sizer: drag handles for a rectangle, headless.")]
pub struct Args {
    /// Override config file (default: $XDG_CONFIG_HOME/sizer/sizer.rune)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/sizer/sizer.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub element: ElementArgs,

    #[command(subcommand)]
    pub cmd: Cmd,
}

/// Per-run overrides for the config file.
#[derive(Debug, Default, clap::Args)]
pub struct ElementArgs {
    /// Handle thickness: "all", "h,v" or "left,top,right,bottom"
    #[arg(long, global = true)]
    pub thickness: Option<EdgeThickness>,

    /// Surface the element sits on
    #[arg(long, value_enum, global = true)]
    pub surface: Option<Surface>,

    /// Explicit element size, e.g. 100x50
    #[arg(long, value_parser = config::parse_size, global = true)]
    pub size: Option<Size>,

    /// Element position on a canvas, e.g. 10,10
    #[arg(long, value_parser = config::parse_point, global = true, allow_hyphen_values = true)]
    pub position: Option<Point>,

    /// Explicit minimum size, e.g. 20x20
    #[arg(long, value_parser = config::parse_size, global = true)]
    pub min_size: Option<Size>,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// List the eight handle roles, whether each exists and its cursor
    Handles {
        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print handle placements for the current element
    Layout {
        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },

    /// Feed a gesture script through the overlay
    Replay {
        /// Script file ("-" or omitted reads stdin)
        script: Option<PathBuf>,

        /// Print handle placements after every event
        #[arg(long)]
        layout: bool,
    },
}

impl ElementArgs {
    pub fn apply(&self, cfg: &mut config::SizerConfig) {
        if let Some(t) = self.thickness {
            cfg.thickness = t;
        }
        if let Some(s) = self.surface {
            cfg.surface = s;
        }
        if let Some(s) = self.size {
            cfg.size = Some(s);
        }
        if let Some(p) = self.position {
            cfg.position = Some(p);
        }
        if let Some(m) = self.min_size {
            cfg.min_size = Some(m);
        }
    }
}
