use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::traits::Handshake;

use super::form::{extract_token, CardInformationForm, PersonInformationForm};
use super::types::{PortalPage, Step, CARD_TOKEN_FIELD, PERSON_TOKEN_FIELD};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// ポータルとのHTTPセッション
///
/// Cookieストアを持つクライアントを所有する。複数スレッドで共有しない。
pub struct PortalSession {
    config: ScraperConfig,
    client: Client,
}

impl PortalSession {
    pub fn new(config: ScraperConfig) -> Result<Self, ScraperError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let client = builder
            .build()
            .map_err(|e| ScraperError::ClientInit(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// フォームをPOSTして遷移先ページを返す
    async fn submit_form<T: Serialize + ?Sized>(
        &self,
        step: Step,
        url: &Url,
        form: &T,
    ) -> Result<PortalPage, ScraperError> {
        debug!("{}: POST {}", step, url);

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
            .form(form)
            .send()
            .await?;

        read_page(step, response).await
    }
}

/// ステータスを確認し、リダイレクト後のURLと本文を取り出す
async fn read_page(step: Step, response: Response) -> Result<PortalPage, ScraperError> {
    let response = response.error_for_status()?;
    let url = response.url().clone();
    let html = response.text().await?;

    debug!("{}: 応答 url={}, size={}bytes", step, url, html.len());
    Ok(PortalPage::new(url, html))
}

#[async_trait]
impl Handshake for PortalSession {
    async fn fetch_initial_page(&mut self) -> Result<PortalPage, ScraperError> {
        let step = Step::InitialPage;
        info!("{}を取得中: {}", step, self.config.portal_url);

        let response = self
            .client
            .get(self.config.portal_url.clone())
            .send()
            .await?;

        read_page(step, response).await
    }

    async fn submit_card_details(&mut self, page: &PortalPage) -> Result<PortalPage, ScraperError> {
        let step = Step::CardInformation;
        info!("{}を送信中...", step);

        let token = extract_token(&page.html, step, CARD_TOKEN_FIELD)?;
        debug!("{}: トークン取得 ({}文字)", step, token.len());

        let form = CardInformationForm::new(&token, &self.config.card, &self.config.valid_until);

        // カード情報は常に固定のポータルURLへ送信する
        self.submit_form(step, &self.config.portal_url, &form).await
    }

    async fn submit_person_information(
        &mut self,
        page: &PortalPage,
    ) -> Result<PortalPage, ScraperError> {
        let step = Step::PersonInformation;
        info!("{}を送信中...", step);

        let token = extract_token(&page.html, step, PERSON_TOKEN_FIELD)?;
        debug!("{}: トークン取得 ({}文字)", step, token.len());

        let form = PersonInformationForm::new(&token, &self.config.birth_date);

        // 前ステップでリダイレクトされた先へ送信する
        self.submit_form(step, &page.url, &form).await
    }
}
