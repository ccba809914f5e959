use tracing_subscriber::EnvFilter;
use uitcheckgemist_scraper::{MissedCheckClient, ScraperConfig};

#[tokio::main]
async fn main() {
    // ログ設定
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("uitcheckgemist_scraper=debug")),
        )
        .init();

    // 環境変数から設定を取得
    // UITCHECK_CARD_NUMBER, UITCHECK_VALID_UNTIL, UITCHECK_BIRTH_DATE (UITCHECK_PORTAL_URL は任意)
    let config = match ScraperConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("設定エラー: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Missed Checks Test ===");
    println!("カード番号: {}", config.card);

    match MissedCheckClient::connect(config).await {
        Ok(client) => {
            println!("成功! 最終URL: {}", client.final_url());
            println!("{}", client.get_missed_checks());
        }
        Err(e) => {
            eprintln!("エラー: {}", e);
        }
    }
}
