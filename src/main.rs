use anyhow::Result;
use clap::Parser;
use folio::config::Overrides;
use folio::feed::FEED_LIMIT;
use folio::theme::Theme;
use std::path::PathBuf;

/// folio - portfolio widgets
///
/// Fetch the blog feed and GitHub project counters shown on a portfolio page.
///
/// Endpoints can also be set with FOLIO_BLOG_URL, FOLIO_BLOG_API_URL and
/// FOLIO_GITHUB_API_URL. If GITHUB_TOKEN is set it is used for authentication,
/// which avoids the anonymous rate limit.
///
/// Examples:
///   folio blog
///   folio stats owner/repo other/repo
///   folio render --projects data/projects.json -o widgets.html
#[derive(Parser, Debug)]
#[command(author, version = env!("FOLIO_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Blog site URL, used for the fallback link
    #[arg(long = "blog-url", value_name = "URL", global = true)]
    pub blog_url: Option<String>,

    /// Blog feed URL (defaults to <blog-url>/index.json)
    #[arg(long = "feed-url", value_name = "URL", global = true)]
    pub feed_url: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show the latest blog posts
    Blog(BlogArgs),

    /// Show star and download counts for repositories
    Stats(StatsArgs),

    /// Render the blog and project sections as an HTML fragment
    Render(RenderArgs),

    /// Show or toggle the light/dark theme preference
    Theme(ThemeArgs),
}

#[derive(clap::Args, Debug)]
pub struct BlogArgs {
    /// Number of posts to show
    #[arg(long, short = 'n', default_value_t = FEED_LIMIT)]
    pub limit: usize,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Repositories in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO", required = true)]
    pub repos: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Projects JSON file describing the cards
    #[arg(long, value_name = "FILE")]
    pub projects: PathBuf,

    /// Write the fragment here instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of posts to show
    #[arg(long, short = 'n', default_value_t = FEED_LIMIT)]
    pub limit: usize,
}

#[derive(clap::Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,

    /// Theme to use when no preference is stored
    #[arg(long, value_name = "THEME", env = "FOLIO_SYSTEM_THEME", default_value = "light")]
    pub system: Theme,
}

#[derive(clap::Subcommand, Debug, PartialEq)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between light and dark and remember the choice
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = folio::runtime::RealRuntime;
    let overrides = Overrides {
        blog_url: cli.blog_url,
        feed_url: cli.feed_url,
        api_url: cli.api_url,
    };

    match cli.command {
        Commands::Blog(args) => folio::commands::blog(runtime, overrides, args.limit).await?,
        Commands::Stats(args) => folio::commands::stats(runtime, overrides, &args.repos).await?,
        Commands::Render(args) => {
            folio::commands::render(runtime, overrides, &args.projects, args.output, args.limit)
                .await?
        }
        Commands::Theme(args) => {
            let toggle = args.action == Some(ThemeAction::Toggle);
            folio::commands::theme(runtime, toggle, args.system)?
        }
    }
    Ok(())
}
