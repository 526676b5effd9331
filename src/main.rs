/* 3rd party libraries */
use clap::{Arg, Command as ClapCommand};
use crossbeam_channel as cbc;
use log::info;
use std::io;
use std::sync::Arc;
use std::thread::Builder;

/* Custom libraries */
use elevator::MotionController;
use presentation::{ChannelPresenter, InputReader, OutputFormat, TerminalDisplay};
use shared::{Command, Notification};

/* Modules */
mod config;
mod elevator;
mod event_log;
mod presentation;
mod shared;

fn cli() -> ClapCommand<'static> {
    ClapCommand::new("lift")
        .about("Elevator simulation driven from the terminal")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .help("Path to the configuration file [default: config.toml]"),
        )
        .arg(
            Arg::new("floors")
                .long("floors")
                .takes_value(true)
                .help("Number of floors in the building"),
        )
        .arg(
            Arg::new("step-time")
                .long("step-time")
                .takes_value(true)
                .help("Milliseconds the cab spends between two floors"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .takes_value(true)
                .possible_values(["text", "json"])
                .default_value("text")
                .help("Output format of the display"),
        )
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();

    // Load the configuration, command line flags win
    let mut config = unwrap_or_exit!(config::load_config(matches.value_of("config")));
    if matches.is_present("floors") {
        config.building.total_floors = unwrap_or_exit!(matches.value_of_t::<u8>("floors"));
    }
    if matches.is_present("step-time") {
        config.motion.step_time = unwrap_or_exit!(matches.value_of_t::<u64>("step-time"));
    }
    unwrap_or_exit!(config.validate());

    let format = match matches.value_of("format") {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();
    let (notification_tx, notification_rx) = cbc::unbounded::<Notification>();

    // Start the motion controller
    let presenter = Arc::new(ChannelPresenter::new(notification_tx));
    let motion_controller = unwrap_or_exit!(MotionController::new(&config, presenter));
    let display = TerminalDisplay::new(
        motion_controller.building(),
        config.log.visible_lines,
        format,
    );

    let motion_controller_thread = Builder::new().name("motion_controller".into());
    let motion_controller_handle = unwrap_or_exit!(motion_controller_thread
        .spawn(move || motion_controller.run(command_rx, terminate_rx)));

    // Start the input reader
    let input_reader = InputReader::new(command_tx, terminate_tx);
    let input_thread = Builder::new().name("input".into());
    unwrap_or_exit!(input_thread.spawn(move || input_reader.run(io::stdin().lock())));

    // The display runs until the motion controller hangs up
    display.run(notification_rx, io::stdout());

    if motion_controller_handle.join().is_err() {
        log::error!("Motion controller thread panicked");
        std::process::exit(1);
    }
    info!("Lift closed");
}
