use async_trait::async_trait;

use crate::error::ScraperError;
use crate::portal::PortalPage;

#[async_trait]
pub trait Handshake: Send + Sync {
    /// 初期ページ取得（セッションCookie取得）
    async fn fetch_initial_page(&mut self) -> Result<PortalPage, ScraperError>;

    /// カード情報送信
    async fn submit_card_details(&mut self, page: &PortalPage) -> Result<PortalPage, ScraperError>;

    /// 個人情報送信
    async fn submit_person_information(
        &mut self,
        page: &PortalPage,
    ) -> Result<PortalPage, ScraperError>;

    /// 一括実行（fetch_initial_page → submit_card_details → submit_person_information）
    async fn execute(&mut self) -> Result<PortalPage, ScraperError> {
        let page = self.fetch_initial_page().await?;
        let page = self.submit_card_details(&page).await?;
        self.submit_person_information(&page).await
    }
}
