use thiserror::Error;

use crate::portal::Step;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("カード番号の桁数が不正です (16桁必要): {0}")]
    CardNumberLength(String),

    #[error("カード番号のプレフィックスが不正です: {0}")]
    CardNumberPrefix(String),

    #[error("トークンが見つかりません ({step}): {field}")]
    TokenNotFound { step: Step, field: String },

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URLが不正です: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTPクライアント初期化エラー: {0}")]
    ClientInit(String),

    #[error("設定エラー: {0}")]
    Config(String),
}
