use crate::error::{M3uGenError, M3uGenErrorKind, m3ugen_err_res};
use crate::model::ConfigDto;
use crate::utils::CONSTANTS;
use log::error;
use std::env;
use std::path::Path;

pub fn resolve_env_var(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    CONSTANTS.re_env_var.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|e| {
            error!("Could not resolve env var '{var_name}': {e}");
            format!("${{env:{var_name}}}")
        })
    }).to_string()
}

/// True when a `${env:VAR}` placeholder survived resolution.
pub fn has_unresolved_env_var(value: &str) -> bool {
    CONSTANTS.re_env_var.is_match(value)
}

pub fn read_config_text(config_file: &str) -> std::io::Result<String> {
    std::fs::read_to_string(Path::new(config_file))
}

// Placeholders are resolved on the parsed values, so env content is never read as yaml.
fn resolve_config_env_vars(config: &mut ConfigDto) {
    for value in [&mut config.url, &mut config.username, &mut config.password].into_iter().flatten() {
        *value = resolve_env_var(value);
    }
    config.output_file = resolve_env_var(&config.output_file);
    config.user_agent = resolve_env_var(&config.user_agent);
    for value in config.headers.values_mut() {
        *value = resolve_env_var(value);
    }
    if let Some(log_level) = config.log.as_mut().and_then(|l| l.log_level.as_mut()) {
        *log_level = resolve_env_var(log_level);
    }
}

/// Reads the config file (if given) and applies the environment on top of it.
pub fn read_config(config_file: Option<&str>) -> Result<ConfigDto, M3uGenError> {
    let mut config = match config_file {
        None => ConfigDto::default(),
        Some(file) => {
            let content = match read_config_text(file) {
                Ok(content) => content,
                Err(err) => return m3ugen_err_res!(M3uGenErrorKind::Config, "Can't read config file {file}: {err}"),
            };
            let mut dto = match serde_yaml::from_str::<ConfigDto>(&content) {
                Ok(dto) => dto,
                Err(err) => return m3ugen_err_res!(M3uGenErrorKind::Config, "Can't parse config file {file}: {err}"),
            };
            resolve_config_env_vars(&mut dto);
            dto
        }
    };
    config.apply_env(|key| env::var(key).ok());
    Ok(config)
}
