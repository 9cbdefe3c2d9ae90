#[macro_use]
extern crate log;

use std::env::current_dir;
use std::error::Error;
use std::fs::{create_dir_all, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::{crate_description, crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};

use penscript::config::{Config, CONFIG_FILE};
use penscript::document::render;
use penscript::units::{FeedRate, Mm};
use penscript::Error as PError;

macro_rules! unwrap {
    ($e: expr, $error: expr) => {
        match $e {
            Some(e) => e,
            None => return Err(Box::new($error)),
        }
    };
}

/// A numeric option of the build subcommand, and the setting it overrides.
struct NumberOption {
    name: &'static str,
    short: Option<&'static str>,
    help: &'static str,
    apply: fn(&mut Config, f64),
}

const NUMBERS: &[NumberOption] = &[
    NumberOption {
        name: "line-length",
        short: Some("l"),
        help: "Maximum length of a line",
        apply: |config: &mut Config, value: f64| config.layout.line_length = Mm(value),
    },
    NumberOption {
        name: "line-spacing",
        short: Some("s"),
        help: "Distance between two subsequent lines",
        apply: |config: &mut Config, value: f64| config.layout.line_spacing = Mm(value),
    },
    NumberOption {
        name: "padding",
        short: Some("p"),
        help: "Margin of the paper, half of it is left between characters",
        apply: |config: &mut Config, value: f64| config.layout.padding = Mm(value),
    },
    NumberOption {
        name: "font-size",
        short: Some("f"),
        help: "Font size scaling factor",
        apply: |config: &mut Config, value: f64| config.layout.font_size = value,
    },
    NumberOption {
        name: "paper-width",
        short: None,
        help: "Width of the paper (e.g. 210 for A4 in mm)",
        apply: |config: &mut Config, value: f64| config.layout.paper_width = Mm(value),
    },
    NumberOption {
        name: "paper-height",
        short: None,
        help: "Height of the paper (e.g. 297 for A4 in mm)",
        apply: |config: &mut Config, value: f64| config.layout.paper_height = Mm(value),
    },
    NumberOption {
        name: "z-height",
        short: None,
        help: "Height of the lifted pen",
        apply: |config: &mut Config, value: f64| config.machine.z_height = Mm(value),
    },
    NumberOption {
        name: "travel-speed",
        short: None,
        help: "Speed of the pen when it is up, in mm/min",
        apply: |config: &mut Config, value: f64| config.machine.travel_speed = FeedRate(value),
    },
    NumberOption {
        name: "write-speed",
        short: None,
        help: "Speed of the pen when it is down, in mm/min",
        apply: |config: &mut Config, value: f64| config.machine.write_speed = FeedRate(value),
    },
    NumberOption {
        name: "z-speed",
        short: None,
        help: "Speed of the pen when it is lifted, in mm/min",
        apply: |config: &mut Config, value: f64| config.machine.z_speed = FeedRate(value),
    },
];

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        exit(1);
    }
}

fn build_subcommand<'a, 'b>() -> App<'a, 'b> {
    let mut build = SubCommand::with_name("build")
        .about("Compiles a text into G-code")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("Configuration file, penscript.toml is looked up by default"),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("FILE")
                .default_value("-")
                .help("File to read the text from"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("FILE")
                .required(true)
                .help("File in which to save the G-code"),
        )
        .arg(
            Arg::with_name("glyphs")
                .short("g")
                .long("glyphs")
                .takes_value(true)
                .value_name("DIR")
                .help("Directory containing the glyph definitions"),
        );

    for option in NUMBERS {
        let mut arg = Arg::with_name(option.name)
            .long(option.name)
            .takes_value(true)
            .value_name("NUMBER")
            .allow_hyphen_values(true)
            .help(option.help);

        if let Some(short) = option.short {
            arg = arg.short(short);
        }

        build = build.arg(arg);
    }

    build
}

/// Reads a numeric option, if it was given.
fn number(matches: &ArgMatches, name: &str) -> Result<Option<f64>, Box<dyn Error>> {
    match matches.value_of(name) {
        Some(value) => match value.parse::<f64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(format!("--{} expects a number, got \"{}\"", name, value).into()),
        },
        None => Ok(None),
    }
}

/// Overrides the configuration with the options of the command line.
fn apply_options(config: &mut Config, matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    if let Some(glyphs) = matches.value_of("glyphs") {
        config.glyphs = PathBuf::from(glyphs);
    }

    for option in NUMBERS {
        if let Some(value) = number(matches, option.name)? {
            (option.apply)(config, value);
        }
    }

    Ok(())
}

fn init(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut directory = PathBuf::from(unwrap!(current_dir().ok(), PError::CannotReadCurrentDir));

    // If a directory was given, the project is created there.
    if let Some(name) = matches.value_of("DIRECTORY") {
        directory.push(name);
    }

    create_dir_all(&directory)?;

    directory.push(CONFIG_FILE);
    if directory.exists() {
        return Err(format!("{} already exists", directory.display()).into());
    }

    Config::default().save(&directory)?;
    info!("created {}", directory.display());

    Ok(())
}

fn build(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut config = match matches.value_of("config") {
        Some(path) => Config::from_file(path)?,
        None => {
            let current_dir = unwrap!(current_dir().ok(), PError::CannotReadCurrentDir);

            match Config::find(&current_dir) {
                Some(path) => {
                    info!("using {}", path.display());
                    Config::from_file(path)?
                }
                None => {
                    info!("no {} found, using the default configuration", CONFIG_FILE);
                    Config::default()
                }
            }
        }
    };

    apply_options(&mut config, matches)?;

    let input = matches.value_of("input").unwrap_or("-");
    let mut text = String::new();
    if input == "-" {
        io::stdin().read_to_string(&mut text)?;
    } else {
        File::open(input)?.read_to_string(&mut text)?;
    }

    let compiled = render(&text, &config)?;

    if !compiled.warnings.is_empty() {
        let path = if input == "-" { "<stdin>" } else { input };
        eprint!("{}", compiled.warnings(path, &text));
    }

    // The output is only created once the compilation succeeded.
    let output = unwrap!(
        matches.value_of("output"),
        io::Error::new(io::ErrorKind::InvalidInput, "no output file")
    );
    let mut file = File::create(output)?;
    file.write_all(compiled.to_gcode().as_bytes())?;
    info!("G-code written to {}", output);

    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = App::new("penscript")
        .version(crate_version!())
        .about(crate_description!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("init")
                .about("Creates a default penscript.toml")
                .arg(Arg::with_name("DIRECTORY").required(false)),
        )
        .subcommand(build_subcommand())
        .get_matches();

    match matches.subcommand() {
        ("init", Some(init_matches)) => init(init_matches),
        ("build", Some(build_matches)) => build(build_matches),
        _ => Ok(()),
    }
}
