use anyhow::Result;
use clap::{Parser, Subcommand};
use jyutping_chapters::{logger, App, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jyutping-chapters", about = "按常用程度重新排序汉字并切分章节")]
struct Cli {
    /// TOML 配置文件（环境变量优先）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// 章节数据目录（覆盖配置）
    #[arg(short, long, global = true)]
    data_dir: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 重新排序全部汉字并写回章节文件
    Rank {
        /// 章节数（覆盖配置）
        #[arg(long)]
        chapters: Option<i64>,
        /// 只打印报告，不备份不写入
        #[arg(long)]
        dry_run: bool,
    },
    /// 检查章节文件的数据质量
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    // 初始化日志
    logger::init(config.verbose_logging);

    match cli.command {
        Commands::Rank { chapters, dry_run } => {
            if let Some(chapters) = chapters {
                config.chapter_count = chapters;
            }
            App::initialize(config)?.run_rank(dry_run).await?;
        }
        Commands::Validate => {
            let report = App::initialize(config)?.run_validate().await?;
            if !report.is_ok() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
