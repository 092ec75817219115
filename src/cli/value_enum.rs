// src/cli/value_enum.rs
use clap::ValueEnum;
use daily_avg_domain::IndexKind;
use daily_avg_shared_kernel::Granularity;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl,
    Md,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => Self::Table,
            CliOutputFormat::Csv => Self::Csv,
            CliOutputFormat::Tsv => Self::Tsv,
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Jsonl => Self::Jsonl,
            CliOutputFormat::Md => Self::Md,
            #[cfg(feature = "yaml")]
            CliOutputFormat::Yaml => Self::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliIndexKind {
    /// キー順 AVL 木
    ByKey,
    /// 平均値順 AVL 木 (同値はキーで順序付け)
    ByValue,
    /// 11 バケットのチェイン法ハッシュ表
    Chained,
}

impl From<CliIndexKind> for IndexKind {
    fn from(value: CliIndexKind) -> Self {
        match value {
            CliIndexKind::ByKey => Self::ByKey,
            CliIndexKind::ByValue => Self::ByValue,
            CliIndexKind::Chained => Self::Chained,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliGranularity {
    Day,
    Month,
    Year,
}

impl From<CliGranularity> for Granularity {
    fn from(value: CliGranularity) -> Self {
        match value {
            CliGranularity::Day => Self::Day,
            CliGranularity::Month => Self::Month,
            CliGranularity::Year => Self::Year,
        }
    }
}
