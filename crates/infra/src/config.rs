use chrono_tz::{Tz, UTC};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Timezone used to decide which calendar day a `Reminder` belongs to
    pub timezone: Tz,
    /// Whether the context should start out with a demo `Reminder` stored,
    /// useful when running the calendar without any user data
    pub seed_demo_reminders: bool,
}

impl Config {
    /// Reads the config from the environment
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let default = Self::default();

        let timezone = match lookup("REMINDERS_TIMEZONE") {
            Some(timezone) => match timezone.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given REMINDERS_TIMEZONE: {} is not a valid IANA timezone, falling back to: {}.",
                        timezone, default.timezone
                    );
                    default.timezone
                }
            },
            None => {
                info!(
                    "Did not find REMINDERS_TIMEZONE environment variable. Using {}.",
                    default.timezone
                );
                default.timezone
            }
        };

        let seed_demo_reminders = match lookup("REMINDERS_SEED_DEMO") {
            Some(seed) => match seed.trim().to_lowercase().parse::<bool>() {
                Ok(seed) => seed,
                Err(_) => {
                    warn!(
                        "The given REMINDERS_SEED_DEMO: {} is not true or false, falling back to: {}.",
                        seed, default.seed_demo_reminders
                    );
                    default.seed_demo_reminders
                }
            },
            None => default.seed_demo_reminders,
        };

        Self {
            timezone,
            seed_demo_reminders,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: UTC,
            seed_demo_reminders: false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn it_uses_defaults_without_env() {
        let config = config_from(&[]);
        assert_eq!(config.timezone, UTC);
        assert!(!config.seed_demo_reminders);
    }

    #[test]
    fn it_reads_valid_values() {
        let config = config_from(&[
            ("REMINDERS_TIMEZONE", "Europe/Oslo"),
            ("REMINDERS_SEED_DEMO", "TRUE"),
        ]);
        assert_eq!(config.timezone, chrono_tz::Europe::Oslo);
        assert!(config.seed_demo_reminders);
    }

    #[test]
    fn it_falls_back_on_invalid_values() {
        let config = config_from(&[
            ("REMINDERS_TIMEZONE", "Mars/Olympus"),
            ("REMINDERS_SEED_DEMO", "yes please"),
        ]);
        assert_eq!(config.timezone, UTC);
        assert!(!config.seed_demo_reminders);
    }
}
