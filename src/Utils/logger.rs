use chrono::Local;
use simplelog::*;
use std::fs::File;

/// Initializes terminal logging (and optionally a timestamped log file) from
/// a level string. "off"/"none" disables logging entirely. Repeated calls are
/// harmless: a second init attempt is ignored.
pub fn init_logging(loglevel: Option<String>, log_to_file: bool) {
    let is_logging_disabled = loglevel
        .as_ref()
        .map(|level| level == "off" || level == "none")
        .unwrap_or(false);
    if is_logging_disabled {
        return;
    }

    let log_option = if let Some(level) = loglevel {
        match level.as_str() {
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => panic!("loglevel must be debug, info, warn or error"),
        }
    } else {
        LevelFilter::Info
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if log_to_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("log_{}.txt", date_and_time);
        if let Ok(file) = File::create(name) {
            loggers.push(WriteLogger::new(log_option, Config::default(), file));
        }
    }

    let _ = CombinedLogger::init(loggers);
}
