// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use super::{
    parsers::{AverageArg, KeyArg},
    value_enum::{CliGranularity, CliIndexKind, CliOutputFormat},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "daily_avg",
    version = crate::VERSION,
    about = "日付キー付き計測値の集計ツール (AVL 木 / チェイン法ハッシュ表)"
)]
pub struct Args {
    /// 使用するインデックス
    #[arg(short, long, value_enum, default_value = "by-key", global = true, help_heading = "インデックス")]
    pub index: CliIndexKind,

    /// 集計キーの粒度
    #[arg(short, long, value_enum, default_value = "day", global = true, help_heading = "インデックス")]
    pub granularity: CliGranularity,

    /// 出力フォーマット
    #[arg(short, long, value_enum, default_value = "table", global = true, help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 最終的な集計結果をファイルへ書き出す (.json → JSON, .txt → レポート, その他 CSV)
    #[arg(long, value_hint = ValueHint::FilePath, global = true, help_heading = "出力")]
    pub export: Option<PathBuf>,

    /// 不正な行があれば即座にエラー終了する
    #[arg(long, global = true, help_heading = "入力")]
    pub strict: bool,

    /// 進捗を stderr に表示
    #[arg(long, global = true, help_heading = "出力")]
    pub progress: bool,

    /// ログを詳細にする (複数指定可)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, conflicts_with = "verbose", global = true, help_heading = "ログ")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// 全集計値を一覧表示 (木は順序通り, ハッシュ表はバケット順)
    List(Inputs),
    /// キーの集計値を表示
    Get {
        key: KeyArg,
        #[command(flatten)]
        inputs: Inputs,
    },
    /// キーの平均値を上書き (合計 = 平均 × 件数)
    Edit {
        key: KeyArg,
        #[arg(allow_negative_numbers = true)]
        average: AverageArg,
        #[command(flatten)]
        inputs: Inputs,
    },
    /// キーを削除
    Delete {
        key: KeyArg,
        #[command(flatten)]
        inputs: Inputs,
    },
    /// 最小平均のキーを表示 (by-value のみ)
    Min(Inputs),
    /// 最大平均のキーを表示 (by-value のみ)
    Max(Inputs),
    /// 指定した平均値と一致するキーを表示 (木のみ)
    Find {
        #[arg(allow_negative_numbers = true)]
        average: AverageArg,
        #[command(flatten)]
        inputs: Inputs,
    },
    /// バケットごとのチェインを表示 (chained のみ)
    Buckets(Inputs),
}

/// Input files shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Inputs {
    /// JSON Lines 形式の入力ファイル (省略時または `-` は標準入力)
    #[arg(value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,
}

impl CliCommand {
    pub const fn inputs(&self) -> &Inputs {
        match self {
            Self::List(inputs) | Self::Min(inputs) | Self::Max(inputs) | Self::Buckets(inputs) => inputs,
            Self::Get { inputs, .. }
            | Self::Edit { inputs, .. }
            | Self::Delete { inputs, .. }
            | Self::Find { inputs, .. } => inputs,
        }
    }
}
