/// simplelog-based logging setup
pub mod logger;
/// logical file name -> path lookup (settings.toml)
pub mod settings;
/// message id -> text lookup (information.toml)
pub mod information;
/// console table output of calculation records
pub mod reporting;
