use crate::model::LogLevelConfig;
use crate::utils::{read_config_text, resolve_env_var, ENV_LOG_LEVEL};
use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};

const LOG_ERROR_LEVEL_MOD: &[&str] = &[
    "reqwest::async_impl::client",
    "reqwest::connect",
    "hyper_util::client",
];

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        // "info" => LevelFilter::Info,
        _ => LevelFilter::Info,
    }
}

fn get_config_log_level(config_file: Option<&str>) -> Option<String> {
    let content = read_config_text(config_file?).ok()?;
    serde_yaml::from_str::<LogLevelConfig>(&content)
        .map_err(|e| error!("Failed to parse log config file: {e}"))
        .ok()
        .and_then(|cfg| cfg.log.and_then(|l| l.log_level))
        .map(|level| resolve_env_var(&level))
}

/// Splits `info,reqwest=debug` style settings into a default level and module filters.
fn parse_log_levels(log_level: &str) -> (Option<LevelFilter>, Vec<(String, LevelFilter)>) {
    let mut default_level = None;
    let mut module_levels = vec![];
    for pair in log_level.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if let Some((module, level)) = pair.split_once('=') {
            module_levels.push((module.trim().to_string(), get_log_level(level)));
        } else {
            default_level = Some(get_log_level(pair));
        }
    }
    (default_level, module_levels)
}

pub fn init_logger(user_log_level: Option<&String>, config_file: Option<&str>) {
    let env_log_level = std::env::var(ENV_LOG_LEVEL).ok();

    let mut log_builder = Builder::from_default_env();
    log_builder.target(Target::Stdout);

    // priority  CLI-Argument, Env-Var, Config, Default
    let log_level = user_log_level
        .map(ToString::to_string) // cli-argument
        .or(env_log_level) // env
        .or_else(|| get_config_log_level(config_file)) // config
        .unwrap_or_else(|| "info".to_string()); // Default

    let (default_level, module_levels) = parse_log_levels(&log_level);
    log_builder.filter_level(default_level.unwrap_or(LevelFilter::Info));
    for module in LOG_ERROR_LEVEL_MOD {
        log_builder.filter_module(module, LevelFilter::Error);
    }
    for (module, level) in &module_levels {
        log_builder.filter_module(module, *level);
    }
    log_builder.init();
    info!("Log Level {log_level}");
}

#[cfg(test)]
mod tests {
    use super::{get_log_level, parse_log_levels};
    use log::LevelFilter;

    #[test]
    fn test_get_log_level() {
        assert_eq!(get_log_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(get_log_level("warn"), LevelFilter::Warn);
        assert_eq!(get_log_level("whatever"), LevelFilter::Info);
    }

    #[test]
    fn test_parse_log_levels() {
        let (default_level, modules) = parse_log_levels("warn, m3ugen=debug ,reqwest=trace");
        assert_eq!(default_level, Some(LevelFilter::Warn));
        assert_eq!(modules, vec![("m3ugen".to_string(), LevelFilter::Debug),
                                 ("reqwest".to_string(), LevelFilter::Trace)]);

        let (default_level, modules) = parse_log_levels("m3ugen=trace");
        assert_eq!(default_level, None);
        assert_eq!(modules.len(), 1);
    }
}
