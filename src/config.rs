// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

/// Number of questions served per page when `QUESTIONS_PER_PAGE` is not set.
pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub bind_addr: SocketAddr,
    pub log_dir: String,
    /// Page size used by `GET /questions`.
    pub questions_per_page: usize,
    /// Fixed seed for the quiz RNG. `None` seeds from entropy.
    pub quiz_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| format!("BIND_ADDR is not a valid socket address: {}", e))?;

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let questions_per_page = match env::var("QUESTIONS_PER_PAGE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => QUESTIONS_PER_PAGE,
        };

        let quiz_seed = match env::var("QUIZ_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|e| format!("QUIZ_SEED must be an unsigned integer: {}", e))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            rust_log,
            bind_addr,
            log_dir,
            questions_per_page,
            quiz_seed,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            rust_log: "info".to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_dir: "logs".to_string(),
            questions_per_page: QUESTIONS_PER_PAGE,
            quiz_seed: None,
        }
    }
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("QUESTIONS_PER_PAGE must be greater than zero".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(format!("QUESTIONS_PER_PAGE must be a positive integer: {}", e)),
    }
}
