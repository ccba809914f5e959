use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::Service;
use tracing::info;
use url::Url;

use crate::card::OvChipCard;
use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::portal::MissedCheckClient;

/// 未チェック記録取得リクエスト
#[derive(Debug, Clone)]
pub struct MissedCheckRequest {
    pub card_number: String,
    pub valid_until: String,
    pub birth_date: String,
    pub portal_url: Option<String>,
}

impl MissedCheckRequest {
    pub fn new(
        card_number: impl Into<String>,
        valid_until: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            valid_until: valid_until.into(),
            birth_date: birth_date.into(),
            portal_url: None,
        }
    }

    pub fn with_portal_url(mut self, url: impl Into<String>) -> Self {
        self.portal_url = Some(url.into());
        self
    }
}

impl TryFrom<MissedCheckRequest> for ScraperConfig {
    type Error = ScraperError;

    fn try_from(req: MissedCheckRequest) -> Result<Self, Self::Error> {
        let card = OvChipCard::new(&req.card_number)?;
        let config = ScraperConfig::new(card, req.valid_until, req.birth_date);

        match req.portal_url {
            Some(url) => config.with_portal_url(&url),
            None => Ok(config),
        }
    }
}

/// 取得結果
#[derive(Debug, Clone)]
pub struct MissedCheckResult {
    pub html: String,
    pub final_url: Url,
}

/// tower::Serviceを実装した未チェック記録サービス
#[derive(Debug, Clone, Default)]
pub struct MissedCheckService {}

impl MissedCheckService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<MissedCheckRequest> for MissedCheckService {
    type Response = MissedCheckResult;
    type Error = ScraperError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: MissedCheckRequest) -> Self::Future {
        info!("未チェック記録リクエスト受信");

        Box::pin(async move {
            let config = ScraperConfig::try_from(req)?;
            let client = MissedCheckClient::connect(config).await?;

            let result = MissedCheckResult {
                html: client.get_missed_checks().to_string(),
                final_url: client.final_url().clone(),
            };

            info!(
                "取得完了: url={}, size={}bytes",
                result.final_url,
                result.html.len()
            );

            Ok(result)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missed_check_request_builder() {
        let req = MissedCheckRequest::new("3528 1234 5678 9012", "31-12-2030", "01-01-1990")
            .with_portal_url("http://127.0.0.1:8080/");

        assert_eq!(req.card_number, "3528 1234 5678 9012");
        assert_eq!(req.valid_until, "31-12-2030");
        assert_eq!(req.birth_date, "01-01-1990");
        assert_eq!(req.portal_url.as_deref(), Some("http://127.0.0.1:8080/"));
    }

    #[test]
    fn test_missed_check_request_to_config() {
        let req = MissedCheckRequest::new("3528 1234 5678 9012", "31-12-2030", "01-01-1990");
        let config = ScraperConfig::try_from(req).unwrap();

        assert_eq!(config.card.number(), "3528-1234-5678-9012");
        assert_eq!(config.portal_url.as_str(), crate::config::PORTAL_URL);
    }

    #[test]
    fn test_invalid_card_rejected_before_request() {
        let req = MissedCheckRequest::new("1234 5678 9012 3456", "31-12-2030", "01-01-1990");
        let result = ScraperConfig::try_from(req);
        assert!(matches!(result, Err(ScraperError::CardNumberPrefix(_))));
    }
}
