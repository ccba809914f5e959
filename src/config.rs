use url::Url;

use crate::card::OvChipCard;
use crate::error::ScraperError;

pub const PORTAL_URL: &str = "https://www.uitcheckgemist.nl/";

pub const ENV_CARD_NUMBER: &str = "UITCHECK_CARD_NUMBER";
pub const ENV_VALID_UNTIL: &str = "UITCHECK_VALID_UNTIL";
pub const ENV_BIRTH_DATE: &str = "UITCHECK_BIRTH_DATE";
pub const ENV_PORTAL_URL: &str = "UITCHECK_PORTAL_URL";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub card: OvChipCard,
    /// カード有効期限（ポータルの入力形式のまま送信する）
    pub valid_until: String,
    /// 所有者の生年月日（ポータルの入力形式のまま送信する）
    pub birth_date: String,
    pub portal_url: Url,
    pub user_agent: Option<String>,
}

impl ScraperConfig {
    pub fn new(
        card: OvChipCard,
        valid_until: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            card,
            valid_until: valid_until.into(),
            birth_date: birth_date.into(),
            portal_url: default_portal_url(),
            user_agent: None,
        }
    }

    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ScraperError> {
        let card = OvChipCard::new(&required_env(ENV_CARD_NUMBER)?)?;
        let config = Self::new(
            card,
            required_env(ENV_VALID_UNTIL)?,
            required_env(ENV_BIRTH_DATE)?,
        );

        match std::env::var(ENV_PORTAL_URL) {
            Ok(url) => config.with_portal_url(&url),
            Err(_) => Ok(config),
        }
    }

    pub fn with_portal_url(mut self, url: &str) -> Result<Self, ScraperError> {
        self.portal_url = Url::parse(url)?;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

fn default_portal_url() -> Url {
    // 定数なので失敗しない
    Url::parse(PORTAL_URL).expect("PORTAL_URL is a valid URL")
}

fn required_env(name: &str) -> Result<String, ScraperError> {
    std::env::var(name).map_err(|_| ScraperError::Config(format!("環境変数 {} が未設定です", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> OvChipCard {
        OvChipCard::new("3528 1234 5678 9012").unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = ScraperConfig::new(card(), "31-12-2030", "01-01-1990");

        assert_eq!(config.card.number(), "3528-1234-5678-9012");
        assert_eq!(config.valid_until, "31-12-2030");
        assert_eq!(config.birth_date, "01-01-1990");
        assert_eq!(config.portal_url.as_str(), PORTAL_URL);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ScraperConfig::new(card(), "31-12-2030", "01-01-1990")
            .with_portal_url("http://127.0.0.1:8080/")
            .unwrap()
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.portal_url.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(config.user_agent.as_deref(), Some("test-agent/1.0"));
    }

    #[test]
    fn test_invalid_portal_url() {
        let result = ScraperConfig::new(card(), "31-12-2030", "01-01-1990").with_portal_url("not a url");
        assert!(matches!(result, Err(ScraperError::InvalidUrl(_))));
    }
}
