use cricket_scraper::{tools, CricketClient, ToolCall};
use serde_json::json;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let player = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Virat Kohli".to_string());
    let client = CricketClient::new();

    let calls = [
        json!({"tool": "get_player_stats", "arguments": {"player_name": player, "match_format": "ODI"}}),
        json!({"tool": "get_icc_rankings", "arguments": {"category": "batting"}}),
        json!({"tool": "get_live_matches"}),
        json!({"tool": "get_cricket_news"}),
    ];

    for raw in calls {
        let output = match ToolCall::from_json(&raw) {
            Ok(call) => {
                println!("== {}", call.name());
                match tools::call(&client, call).await {
                    Ok(value) => value,
                    Err(err) => err.to_json(),
                }
            }
            Err(err) => err.to_json(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_else(|e| e.to_string())
        );
    }
}
