//! kbdrag - keyboard drag-and-drop demo board
//!
//! Lift an item with Space, carry it with the arrow keys, drop it with Space or
//! cancel with Escape. Resizing the terminal or scrolling the mouse wheel cancels.

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use kbdrag::render::{ColorTheme, TerminalUI};
use kbdrag::{Axis, DemoConfig};

fn cli() -> Command {
    let command = Command::new("kbdrag")
        .version(kbdrag::VERSION)
        .about("Drag items between lists using only the keyboard")
        .long_about(
            "kbdrag draws a board of lists in the terminal and moves items with a keyboard \
             drag sensor: Space lifts and drops, arrows move, Escape cancels. Set RUST_LOG \
             and redirect stderr to see sensor transitions.",
        )
        .arg(
            Arg::new("lists")
                .long("lists")
                .help("Number of lists on the board")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("items")
                .long("items")
                .help("Items per list")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("axis")
                .long("axis")
                .help("Axis items are laid out along: vertical or horizontal"),
        )
        .arg(
            Arg::new("tick-ms")
                .long("tick-ms")
                .help("Redraw interval in milliseconds")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("frame-ms")
                .long("frame-ms")
                .help("Minimum interval between two movement flushes in milliseconds")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("monochrome")
                .long("monochrome")
                .help("Use a theme without colors")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "config")]
    let command = command.arg(
        Arg::new("config")
            .long("config")
            .help("Path to a TOML configuration file"),
    );

    command
}

#[cfg(feature = "config")]
fn base_config(matches: &ArgMatches) -> Result<DemoConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => Ok(DemoConfig::load(std::path::Path::new(path))?),
        None => match DemoConfig::default_path().filter(|path| path.is_file()) {
            Some(path) => Ok(DemoConfig::load(&path)?),
            None => Ok(DemoConfig::default()),
        },
    }
}

#[cfg(not(feature = "config"))]
fn base_config(_matches: &ArgMatches) -> Result<DemoConfig> {
    Ok(DemoConfig::default())
}

fn resolve_config(matches: &ArgMatches) -> Result<DemoConfig> {
    let mut config = base_config(matches)?;

    if let Some(lists) = matches.get_one::<usize>("lists") {
        config.lists = *lists;
    }
    if let Some(items) = matches.get_one::<usize>("items") {
        config.items_per_list = *items;
    }
    if let Some(axis) = matches.get_one::<String>("axis") {
        config.axis = axis.parse::<Axis>()?;
    }
    if let Some(tick) = matches.get_one::<u64>("tick-ms") {
        config.tick_ms = *tick;
    }
    if let Some(frame) = matches.get_one::<u64>("frame-ms") {
        config.sensor.frame_interval_ms = *frame;
    }

    if let Err(err) = config.validate() {
        anyhow::bail!("{}", err);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stderr only, the board owns stdout
    env_logger::init();

    let matches = cli().get_matches();
    let config = resolve_config(&matches)?;
    log::debug!("starting with {:?}", config);

    let theme = if matches.get_flag("monochrome") {
        ColorTheme::monochrome()
    } else {
        ColorTheme::default()
    };
    let mut ui = TerminalUI::with_theme(theme)?;

    kbdrag::app::run(config, &mut ui).await?;

    Ok(())
}
