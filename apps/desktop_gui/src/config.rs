//! Startup configuration: command-line flags with an environment fallback for logging.

use clap::Parser;

pub const LOG_FILTER_ENV_VAR: &str = "HALL_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const DEFAULT_WIDTH: f32 = 600.0;
pub const DEFAULT_HEIGHT: f32 = 400.0;
pub const MIN_WIDTH: f32 = 320.0;
pub const MIN_HEIGHT: f32 = 240.0;

#[derive(Parser, Debug, Clone)]
#[command(name = "hall_desktop", about = "Gestion Salle des Fêtes")]
pub struct StartupConfig {
    /// tracing filter directive, e.g. `debug` or `reservations=debug,info`
    #[arg(long)]
    pub log_filter: Option<String>,
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f32,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f32,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl StartupConfig {
    pub fn log_filter(&self) -> String {
        resolve_log_filter(self.log_filter.as_deref(), || {
            let mut attempts = Vec::new();
            let env_value = read_non_empty_env_var(LOG_FILTER_ENV_VAR, &mut attempts);
            for attempt in attempts {
                eprintln!("ignoring log filter override: {attempt}");
            }
            env_value
        })
    }

    pub fn inner_size(&self) -> [f32; 2] {
        [self.width.max(MIN_WIDTH), self.height.max(MIN_HEIGHT)]
    }
}

/// Flag first, then the environment, then the default. The environment is only
/// consulted when the flag is absent or blank.
fn resolve_log_filter(
    flag: Option<&str>,
    env_value: impl FnOnce() -> Option<String>,
) -> String {
    flag.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(env_value)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn read_non_empty_env_var(name: &str, attempts: &mut Vec<String>) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => {
            attempts.push(format!("{name} was set but empty"));
            None
        }
        Ok(value) => Some(value.trim().to_string()),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            attempts.push(format!("{name} is not valid unicode"));
            None
        }
    }
}
