use clap::{Parser, Subcommand};
use freight_site::{config, content, generate, output};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "freight-site")]
#[command(about = "Static site generator for a freight-trucking business")]
#[command(long_about = "\
Static site generator for a freight-trucking business

One content file describes the company, its services, rates and FAQs. The
generator renders the Home, Services, Rates and Contact pages together with
sitemap.xml and robots.txt.

Source structure:

  site/
  ├── content.toml     # Company, services, rates, FAQs, page copy (optional)
  ├── config.toml      # Site URL, contact endpoint, colors (optional)
  └── assets/          # Logo, hero image, favicon → copied to output root

A missing content.toml builds the stock site with a warning. The SITE_URL
environment variable overrides [site] url from config.toml.

Run 'freight-site gen-content' and 'freight-site gen-config' to generate
documented starting files.")]
#[command(version)]
struct Cli {
    /// Site source directory
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page, the sitemap and robots.txt
    Build,
    /// Validate content and config without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a stock content.toml with all sections documented
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let (site_content, site_config) = load_site(&cli.source)?;
            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(
                &site_content,
                &site_config,
                &cli.source.join("assets"),
                &cli.output,
                chrono::Utc::now(),
            )?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (site_content, site_config) = load_site(&cli.source)?;
            output::print_check_output(&site_content, &site_config);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
    }

    Ok(())
}

/// Load and validate `content.toml` and `config.toml` from the source directory.
fn load_site(
    source: &Path,
) -> Result<(content::SiteContent, config::SiteConfig), Box<dyn std::error::Error>> {
    let site_content = content::load_content(&source.join("content.toml"))?;
    let site_config = config::load_config(source)?;
    Ok((site_content, site_config))
}
