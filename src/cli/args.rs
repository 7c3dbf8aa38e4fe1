// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use filter_log_shared_kernel::ProgressInterval;

/// マーカー行 (`# `, `- `, `= `, `+ `, `>`, `<`) だけを残すログフィルタ
#[derive(Parser, Debug, Clone)]
#[command(name = "filter_log", version = crate::VERSION, about = "Copy marker lines of a log into a 7-bit output file")]
pub struct Args {
    /// 入力ログファイル
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// 出力ファイル (上書き)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// 進捗を表示する行間隔
    #[arg(long, value_name = "LINES", default_value_t = ProgressInterval::default())]
    pub progress_interval: ProgressInterval,

    /// 進捗行を出さない (開始/完了行は出す)
    #[arg(short, long)]
    pub quiet: bool,

    /// ログの詳細度 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
