use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub mail: MailConfig,
    pub invitations: InvitationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Address notification mails are sent from.
    pub from_address: String,
    /// Product name shown in the From display name ("{sender} via {product}").
    pub product_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvitationConfig {
    /// Controls who receives accept/decline response links.
    ///
    /// `"yes"` delivers links to every recipient, `"no"` to nobody.
    /// Any other value is read as a comma-separated list of recipient
    /// addresses and domains that can reach this server.
    pub link_recipients: String,
    /// Whether organizer/attendee identities are listed in the mail body.
    /// Defaults to `"no"`, which is the privacy-preserving behavior.
    pub list_attendees: String,
}

impl InvitationConfig {
    /// ## Summary
    /// Returns whether response links may be shown to the given recipient
    /// address, per the `link_recipients` allow-list.
    #[must_use]
    pub fn links_allowed_for(&self, recipient: &str) -> bool {
        let recipient = recipient.to_lowercase();
        let allowed: Vec<String> = self
            .link_recipients
            .to_lowercase()
            .split(',')
            .map(|entry| entry.split_whitespace().collect())
            .collect();

        if allowed.first().is_some_and(|first| first == "yes") {
            return true;
        }

        let domain = recipient.rsplit('@').next().unwrap_or_default();
        allowed.iter().any(|entry| entry == &recipient)
            || allowed.iter().any(|entry| entry == domain)
    }

    /// Returns whether attendee identities may appear in the mail body.
    #[must_use]
    pub fn list_attendees_enabled(&self) -> bool {
        self.list_attendees == "yes"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("mail.from_address", "invitations-noreply@localhost")?
            .set_default("mail.product_name", "Calendar")?
            .set_default("invitations.link_recipients", "yes")?
            .set_default("invitations.list_attendees", "no")?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(level = %settings.logging.level, "Configuration loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::InvitationConfig;

    fn config_with(link_recipients: &str) -> InvitationConfig {
        InvitationConfig {
            link_recipients: link_recipients.to_string(),
            list_attendees: "no".to_string(),
        }
    }

    #[test]
    fn links_allowed_for_everyone() {
        let config = config_with("yes");
        assert!(config.links_allowed_for("anyone@example.com"));
    }

    #[test]
    fn links_suppressed_entirely() {
        let config = config_with("no");
        assert!(!config.links_allowed_for("anyone@example.com"));
    }

    #[test]
    fn links_allowed_by_address() {
        let config = config_with("alice@example.com, bob@example.net");
        assert!(config.links_allowed_for("Bob@Example.net"));
        assert!(!config.links_allowed_for("carol@example.net"));
    }

    #[test]
    fn links_allowed_by_domain() {
        let config = config_with("corp.example.org");
        assert!(config.links_allowed_for("dave@corp.example.org"));
        assert!(!config.links_allowed_for("dave@example.org"));
    }
}
