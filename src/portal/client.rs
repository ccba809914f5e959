use tracing::info;
use url::Url;

use crate::card::OvChipCard;
use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::traits::Handshake;

use super::session::PortalSession;
use super::types::PortalPage;

/// 未チェック記録クライアント
///
/// [`MissedCheckClient::connect`] の中で3ステップのハンドシェイクをすべて実行する。
/// 途中状態のクライアントは存在しない。
pub struct MissedCheckClient {
    session: PortalSession,
    response: PortalPage,
}

impl MissedCheckClient {
    pub async fn connect(config: ScraperConfig) -> Result<Self, ScraperError> {
        info!("ハンドシェイク開始: portal={}", config.portal_url);

        let mut session = PortalSession::new(config)?;
        let response = session.execute().await?;

        info!(
            "ハンドシェイク完了: url={}, size={}bytes",
            response.url,
            response.html.len()
        );

        Ok(Self { session, response })
    }

    /// 最終ページのHTMLをそのまま返す
    pub fn get_missed_checks(&self) -> &str {
        // TODO: チェックイン/チェックアウト記録を構造化して返す
        &self.response.html
    }

    /// 最終ページのURL（リダイレクト後）
    pub fn final_url(&self) -> &Url {
        &self.response.url
    }

    pub fn card(&self) -> &OvChipCard {
        &self.session.config().card
    }

    pub fn valid_until(&self) -> &str {
        &self.session.config().valid_until
    }

    pub fn birth_date(&self) -> &str {
        &self.session.config().birth_date
    }
}
