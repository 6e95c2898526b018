use crate::error::{config::ConfigError, AppError};
use crate::util::parse::parse_u64_from_string;

pub struct Config {
    pub guild_id: u64,
    pub bot_token: String,

    pub role_name_admin: String,
    pub role_name_join: String,
    pub role_name_spec: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(require_var("GUILD_ID")?)?,
            bot_token: require_var("BOT_TOKEN")?,
            role_name_admin: require_var("ROLE_NAME_ADMIN")?,
            role_name_join: require_var("ROLE_NAME_JOIN")?,
            role_name_spec: require_var("ROLE_NAME_SPEC")?,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests loading configuration from the environment.
    ///
    /// Covers the missing-variable, malformed-guild-id, and fully-populated
    /// cases in sequence so the test does not race other env readers.
    ///
    /// Expected: MissingEnvVar, then ParseStringId, then a parsed config
    #[test]
    fn loads_config_from_env() {
        for name in [
            "GUILD_ID",
            "BOT_TOKEN",
            "ROLE_NAME_ADMIN",
            "ROLE_NAME_JOIN",
            "ROLE_NAME_SPEC",
        ] {
            std::env::remove_var(name);
        }

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));

        std::env::set_var("GUILD_ID", "not-a-number");
        std::env::set_var("BOT_TOKEN", "token");
        std::env::set_var("ROLE_NAME_ADMIN", "Organizer");
        std::env::set_var("ROLE_NAME_JOIN", "Raider");
        std::env::set_var("ROLE_NAME_SPEC", "Spectator");

        let result = Config::from_env();
        assert!(matches!(result, Err(AppError::InternalErr(_))));

        std::env::set_var("GUILD_ID", "123456789");

        let config = Config::from_env().unwrap();
        assert_eq!(config.guild_id, 123456789);
        assert_eq!(config.bot_token, "token");
        assert_eq!(config.role_name_admin, "Organizer");
        assert_eq!(config.role_name_join, "Raider");
        assert_eq!(config.role_name_spec, "Spectator");
    }
}
