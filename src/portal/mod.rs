//! uitcheckgemist.nl ポータルモジュール
//!
//! GET → カード情報POST → 個人情報POST の3ステップで未チェック記録ページを取得する

mod client;
mod form;
mod session;
mod types;

pub use client::MissedCheckClient;
pub use form::{extract_token, CardInformationForm, PersonInformationForm};
pub use session::PortalSession;
pub use types::{PortalPage, Step, CARD_TOKEN_FIELD, PERSON_TOKEN_FIELD};
