pub mod settings;
pub mod toml_config;

pub use settings::Settings;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "roster")]
#[command(about = "Validate, classify and report on a small roster of people")]
pub struct CliConfig {
    /// Optional TOML file with [report] and [logging] sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of fibonacci terms to print (default 15)
    #[arg(long)]
    pub fibonacci_terms: Option<u64>,

    /// Print squares of 1..=N (default 10)
    #[arg(long)]
    pub square_limit: Option<u64>,

    /// Print the adults JSON on a single line
    #[arg(long)]
    pub compact_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔（若有）並套用命令列覆蓋設定
    pub fn resolve(&self) -> crate::utils::error::Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                toml_config::TomlConfig::from_file(path)?
            }
            None => toml_config::TomlConfig::default(),
        };

        let mut settings = Settings::from(&file_config);
        if let Some(terms) = self.fibonacci_terms {
            settings.fibonacci_terms = terms;
        }
        if let Some(limit) = self.square_limit {
            settings.square_limit = limit;
        }
        if self.compact_json {
            settings.pretty_json = false;
        }
        settings.verbose |= self.verbose;

        Ok(settings)
    }
}
