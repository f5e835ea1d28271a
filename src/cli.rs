use std::path::PathBuf;

use batch_files_domain::config::ExtensionFilter;
use clap::Parser;

/// Summary output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    Plain,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "batch_files",
    version,
    about = "ディレクトリ内のファイルを固定サイズの連番フォルダへ振り分けるツール"
)]
pub struct Args {
    /// 取り込み対象のディレクトリ
    pub source: PathBuf,

    /// 連番フォルダを作成するディレクトリ
    pub dest: PathBuf,

    /// 1フォルダあたりの最大ファイル数
    #[arg(short = 'n', long, default_value_t = 4)]
    pub group_size: usize,

    /// 対象拡張子 (大文字小文字を区別、先頭のドットは省略可)
    #[arg(long, default_value = ExtensionFilter::DEFAULT)]
    pub ext: String,

    /// ディレクトリ列挙順をそのまま使う（名前順ソートを無効化）
    #[arg(long)]
    pub unsorted: bool,

    /// ファイル単位の失敗を記録して続行する
    #[arg(long)]
    pub keep_going: bool,

    /// サマリ出力フォーマット
    #[arg(long, value_enum, default_value = "plain")]
    pub format: SummaryFormat,

    /// JSON レポートの書き出し先
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// ファイルごとの進捗行を抑制
    #[arg(long, short)]
    pub quiet: bool,
}
