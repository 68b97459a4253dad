/*!
Course-registration manager with a text-menu front end.

Seed data is loaded once at startup from the flat files named in the
configuration; everything afterwards lives in memory and dies with the
process.
*/
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use registrar::{config::Cfg, import, inter, store::Store};

fn main() {
    let log_cfg = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("registrar")
        .build();
    TermLogger::init(
        registrar::log_level_from_env(),
        log_cfg,
        TerminalMode::Stdout,
        ColorChoice::Auto
    ).unwrap();
    log::info!("Logging started.");

    let cfg = match std::env::args().nth(1) {
        Some(path) => match Cfg::from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error loading configuration: {}", &e);
                return;
            },
        },
        None => Cfg::default(),
    };
    log::info!("Configuration:\n{:#?}", &cfg);

    let mut store = Store::new();
    // load_files logs the per-line details itself.
    if let Err(e) = import::load_files(&mut store, &cfg) {
        eprintln!("Error loading seed data: {}", &e);
        return;
    }

    println!("Starting the Student Management System...");
    inter::run(&mut store);
}
