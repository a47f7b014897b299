// src/cli/args.rs
use std::path::PathBuf;

use chunky_domain::config::{DEFAULT_CHUNK_PREFIX, DEFAULT_IGNORE_FILE_NAME, DEFAULT_OUTPUT_DIR};
use clap::{ArgAction, Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "chunky",
    version = crate::VERSION,
    about = "フォルダ配下のファイルを N 個のテキストチャンクにまとめるツール",
    long_about = "フォルダ配下のファイルを N 個のテキストチャンクにまとめます。\n\
                  各ディレクトリの .chunkyignore (gitignore 形式) に一致するファイルは除外され、\n\
                  近いディレクトリの規則が優先されます。出力は <FOLDER>/chunkies/ に書き込まれます。"
)]
pub struct Args {
    /// チャンク化するフォルダ
    #[arg(value_hint = ValueHint::DirPath)]
    pub folder: PathBuf,

    /// 出力するチャンク数（1 以上）
    #[arg(short = 'c', long, default_value_t = 2, allow_negative_numbers = true)]
    pub chunks: i64,

    /// 出力ファイル名のプレフィックス（<PREFIX>_<N>.txt）
    #[arg(long, default_value = DEFAULT_CHUNK_PREFIX)]
    pub output_prefix: String,

    /// フォルダ直下に作成する出力ディレクトリ名
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, help_heading = "詳細")]
    pub output_dir: String,

    /// 除外パターンを記述するファイル名
    #[arg(long, default_value = DEFAULT_IGNORE_FILE_NAME, help_heading = "詳細")]
    pub ignore_file: String,

    /// 書き込まずに出力予定のみ表示
    #[arg(long)]
    pub dry_run: bool,

    /// 結果を JSON で出力
    #[arg(long, help_heading = "出力")]
    pub json: bool,

    /// 標準出力への表示を抑制
    #[arg(short, long, conflicts_with = "verbose", help_heading = "出力")]
    pub quiet: bool,

    /// ログを詳細に（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "出力")]
    pub verbose: u8,
}
