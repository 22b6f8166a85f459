#![allow(non_snake_case)]
use RustedQuad::Utils::information::Information;
use RustedQuad::Utils::logger::init_logging;
use RustedQuad::Utils::reporting::report_records;
use RustedQuad::Utils::settings::Settings;
use RustedQuad::quadrature::torus_task::TorusTask;
use log::{error, warn};
use std::path::Path;

fn print_welcome(information: &Information) {
    println!("{}", information.get_info("welcome-1"));
    println!("{}", information.get_info("welcome-2"));
    println!("{}", information.get_info("copyright"));
}

fn setup_information() -> Information {
    let mut information = Information::new();
    match Settings::from_file(Path::new("settings.toml")) {
        Ok(settings) => {
            if let Some(info_path) = settings.resolve_file("information.toml") {
                if let Err(err) = information.load(&info_path) {
                    warn!("could not load {}: {}", info_path.display(), err);
                }
            }
        }
        Err(err) => warn!("could not load settings.toml: {}", err),
    }
    information
}

fn main() {
    init_logging(Some("info".to_string()), false);

    let information = setup_information();
    print_welcome(&information);

    let mut task = TorusTask::new();
    match task.run() {
        Ok(records) => report_records(records),
        Err(err) => {
            error!("exact integral failed, nothing to compare against: {}", err);
            std::process::exit(1);
        }
    }
}
