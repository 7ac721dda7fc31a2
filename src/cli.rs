use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jagedo-match")]
#[command(about = "Search the JaGedo backend for matching professionals", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドのURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 地域サジェスト用の郡リストを表示
    Counties,

    /// 職種と地域でマッチを検索
    Search {
        /// 職種 (plumbing/electrical/carpentry)
        #[arg(short, long, default_value = "")]
        job_type: String,

        /// 地域（郡名）
        #[arg(short, long, default_value = "")]
        location: String,
    },

    /// 設定管理
    Config {
        /// バックエンドURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト秒数を設定（0で無効）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from([
            "jagedo-match", "search", "--job-type", "plumbing", "--location", "Nairobi",
        ]);
        match cli.command {
            Commands::Search { job_type, location } => {
                assert_eq!(job_type, "plumbing");
                assert_eq!(location, "Nairobi");
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_parse_search_defaults_to_blank() {
        let cli = Cli::parse_from(["jagedo-match", "search"]);
        assert!(matches!(
            cli.command,
            Commands::Search { ref job_type, ref location } if job_type.is_empty() && location.is_empty()
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["jagedo-match", "counties", "-v", "--base-url", "http://localhost:5000"]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:5000"));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
