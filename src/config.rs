// src/config.rs
use std::path::PathBuf;

use daily_avg_domain::IndexKind;
use daily_avg_ports::readings::IngestPlan;
use daily_avg_shared_kernel::Granularity;
use derive_builder::Builder;
use log::LevelFilter;

/// stdout に出す形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl,
    Md,
    #[cfg(feature = "yaml")]
    Yaml,
}

/// What the run does once the index is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Command {
    #[default]
    List,
    Get { key: String },
    Edit { key: String, average: f64 },
    Delete { key: String },
    Min,
    Max,
    Find { average: f64 },
    Buckets,
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get { .. } => "get",
            Self::Edit { .. } => "edit",
            Self::Delete { .. } => "delete",
            Self::Min => "min",
            Self::Max => "max",
            Self::Find { .. } => "find",
            Self::Buckets => "buckets",
        }
    }
}

/// Fully validated run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub command: Command,
    #[builder(default)]
    pub index: IndexKind,
    #[builder(default)]
    pub granularity: Granularity,
    #[builder(default = "vec![PathBuf::from(\"-\")]")]
    pub inputs: Vec<PathBuf>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub export: Option<PathBuf>,
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub progress: bool,
    #[builder(default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn ingest_plan(&self) -> IngestPlan {
        IngestPlan { inputs: self.inputs.clone(), granularity: self.granularity, strict: self.strict }
    }
}
