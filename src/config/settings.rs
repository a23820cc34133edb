use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub exact_score_points: i64,
    pub correct_result_points: i64,
    /// Highest goal count accepted from a player at submission time
    pub max_predicted_goals: i64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            exact_score_points: 5,
            correct_result_points: 2,
            max_predicted_goals: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub fixtures_path: PathBuf,
    pub predictions_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            fixtures_path: PathBuf::from("fixtures.json"),
            predictions_path: PathBuf::from("predictions.json"),
        }
    }
}

impl StorageSettings {
    /// Defaults overridden by `FIXTURES_PATH` / `PREDICTIONS_PATH`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fixtures_path: env_path("FIXTURES_PATH").unwrap_or(defaults.fixtures_path),
            predictions_path: env_path("PREDICTIONS_PATH").unwrap_or(defaults.predictions_path),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub storage: StorageSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            storage: StorageSettings::from_env(),
            server: ServerSettings::default(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}
