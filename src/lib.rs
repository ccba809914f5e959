//! 未チェック記録スクレイパーライブラリ
//!
//! - uitcheckgemist.nl にカード情報と生年月日を送信し、未チェック記録ページを取得
//! - OVチップカード番号の検証
//!
//! # 使用例
//!
//! ```rust,ignore
//! use uitcheckgemist_scraper::{MissedCheckClient, OvChipCard, ScraperConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let card = OvChipCard::new("3528 1234 5678 9012").unwrap();
//!     let config = ScraperConfig::new(card, "31-12-2030", "01-01-1990");
//!
//!     let client = MissedCheckClient::connect(config).await.unwrap();
//!     println!("{}", client.get_missed_checks());
//! }
//! ```
//!
//! # tower::Service 使用例
//!
//! ```rust,ignore
//! use uitcheckgemist_scraper::{MissedCheckRequest, MissedCheckService};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut service = MissedCheckService::new();
//!     let request = MissedCheckRequest::new("3528 1234 5678 9012", "31-12-2030", "01-01-1990");
//!
//!     let result = service.call(request).await.unwrap();
//!     println!("{}", result.html);
//! }
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod portal;
pub mod service;
pub mod traits;

// 主要な型をリエクスポート
pub use card::OvChipCard;
pub use config::ScraperConfig;
pub use error::ScraperError;
pub use portal::{MissedCheckClient, PortalPage, PortalSession, Step};
pub use service::{MissedCheckRequest, MissedCheckResult, MissedCheckService};
pub use traits::Handshake;
