use crate::core::span::default_cutoff;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Student used when `--student` is not given.
    #[serde(default = "default_student")]
    pub student_id: String,
    /// Cutoff (HH:MM) for changing tomorrow's meals.
    #[serde(default = "default_cutoff_str")]
    pub tomorrow_cutoff: String,
    /// Number of days shown by `schedule`.
    #[serde(default = "default_schedule_days")]
    pub schedule_days: u32,
}

fn default_student() -> String {
    "student".to_string()
}
fn default_cutoff_str() -> String {
    default_cutoff().format("%H:%M").to_string()
}
fn default_schedule_days() -> u32 {
    7
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            student_id: default_student(),
            tomorrow_cutoff: default_cutoff_str(),
            schedule_days: default_schedule_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("mealpause")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".mealpause")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mealpause.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("mealpause.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Parsed `tomorrow_cutoff`.
    pub fn cutoff(&self) -> AppResult<NaiveTime> {
        parse_time(&self.tomorrow_cutoff).ok_or_else(|| {
            AppError::Config(format!("invalid tomorrow_cutoff '{}'", self.tomorrow_cutoff))
        })
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(db_path)
    }
}
