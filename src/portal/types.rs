//! ポータル関連の型定義

use std::fmt;

use url::Url;

/// カード情報フォームのトークンフィールド名
pub const CARD_TOKEN_FIELD: &str = "tls_card_information[_token]";

/// 個人情報フォームのトークンフィールド名
pub const PERSON_TOKEN_FIELD: &str = "tls_person_information[_token]";

/// ハンドシェイクのステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// 初期ページ取得（セッションCookie取得）
    InitialPage,
    /// カード情報送信
    CardInformation,
    /// 個人情報（生年月日）送信
    PersonInformation,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::InitialPage => "初期ページ",
            Step::CardInformation => "カード情報",
            Step::PersonInformation => "個人情報",
        };
        f.write_str(name)
    }
}

/// 各ステップのレスポンス
///
/// リダイレクト後の最終URLを保持する。次のステップの送信先はこのURLになる。
#[derive(Debug, Clone)]
pub struct PortalPage {
    pub url: Url,
    pub html: String,
}

impl PortalPage {
    pub fn new(url: Url, html: impl Into<String>) -> Self {
        Self {
            url,
            html: html.into(),
        }
    }
}
