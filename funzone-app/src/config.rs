use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_path: String,
    pub ai_move_delay_ms: u64,
    pub leaderboard_limit: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            storage_path: env::var("STORAGE_PATH")
                .unwrap_or_else(|_| "funzone_data.json".to_string()),
            ai_move_delay_ms: env::var("AI_MOVE_DELAY_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .expect("Invalid AI_MOVE_DELAY_MS"),
            leaderboard_limit: env::var("LEADERBOARD_LIMIT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid LEADERBOARD_LIMIT"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
