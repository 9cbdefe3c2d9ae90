//! The configuration of a penscript project, stored in a `penscript.toml` file.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::units::{FeedRate, Mm};
use crate::{Error, Result};

/// The name of the configuration file.
pub const CONFIG_FILE: &str = "penscript.toml";

/// The dimensions of the text and of the paper.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// The maximal length of a line.
    pub line_length: Mm,

    /// The distance between two lines, before scaling.
    pub line_spacing: Mm,

    /// The margin of the paper, half of which is also left between glyphs.
    pub padding: Mm,

    /// The width of the paper.
    pub paper_width: Mm,

    /// The height of the paper.
    pub paper_height: Mm,

    /// The scale factor applied to every glyph.
    pub font_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> LayoutConfig {
        LayoutConfig {
            line_length: Mm(180.0),
            line_spacing: Mm(8.0),
            padding: Mm(1.5),
            paper_width: Mm(210.0),
            paper_height: Mm(297.0),
            font_size: 1.0,
        }
    }
}

/// The settings of the plotter.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// The height of the pen when it is lifted.
    pub z_height: Mm,

    /// The speed of the pen when it travels lifted.
    pub travel_speed: FeedRate,

    /// The speed of the pen when it draws.
    pub write_speed: FeedRate,

    /// The speed of the pen when it is lifted.
    pub z_speed: FeedRate,
}

impl Default for MachineConfig {
    fn default() -> MachineConfig {
        MachineConfig {
            z_height: Mm(2.5),
            travel_speed: FeedRate(8000.0),
            write_speed: FeedRate(2000.0),
            z_speed: FeedRate(2000.0),
        }
    }
}

/// The whole configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The directory containing the glyph definition files.
    pub glyphs: PathBuf,

    /// The layout of the text.
    pub layout: LayoutConfig,

    /// The settings of the plotter.
    pub machine: MachineConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            glyphs: PathBuf::from("ascii_gcode"),
            layout: LayoutConfig::default(),
            machine: MachineConfig::default(),
        }
    }
}

/// Checks that a value can be used as a dimension or a speed.
fn check(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}

impl Config {
    /// Reads a configuration from a toml file.
    ///
    /// Relative glyph directories are resolved from the directory of the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;

        let mut config: Config = toml::from_str(&content)?;

        if config.glyphs.is_relative() {
            if let Some(parent) = path.parent() {
                config.glyphs = parent.join(&config.glyphs);
            }
        }

        Ok(config)
    }

    /// Looks for a configuration file in a directory and its parents.
    pub fn find<P: AsRef<Path>>(directory: P) -> Option<PathBuf> {
        let mut current = directory.as_ref().to_path_buf();

        loop {
            current.push(CONFIG_FILE);

            if current.is_file() {
                return Some(current);
            }

            // Remove penscript.toml, then go to the parent directory.
            current.pop();
            if !current.pop() {
                return None;
            }
        }
    }

    /// Writes the configuration as a toml file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml = toml::to_string(self)?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(toml.as_bytes())?;
        Ok(())
    }

    /// Checks that every dimension and speed is positive and finite, and that there is room for
    /// text between the margins.
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        check("line_length", layout.line_length.0)?;
        check("line_spacing", layout.line_spacing.0)?;
        check("padding", layout.padding.0)?;
        check("paper_width", layout.paper_width.0)?;
        check("paper_height", layout.paper_height.0)?;
        check("font_size", layout.font_size)?;

        let machine = &self.machine;
        check("z_height", machine.z_height.0)?;
        check("travel_speed", machine.travel_speed.0)?;
        check("write_speed", machine.write_speed.0)?;
        check("z_speed", machine.z_speed.0)?;

        if layout.paper_width <= layout.padding * 2.0 {
            return Err(Error::PaperTooNarrow {
                paper_width: layout.paper_width,
                padding: layout.padding,
            });
        }

        Ok(())
    }
}
