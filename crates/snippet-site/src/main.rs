#[cfg(feature = "ssr")]
mod cli {
    use anyhow::Result;
    use clap::{Parser, Subcommand};
    use snippet_site::clipboard::CopyFeedback;
    use snippet_site::generator::{self, SiteConfig};
    use std::io::Write;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use tracing::{debug, info};
    use tracing_subscriber::{EnvFilter, fmt};

    #[derive(Parser)]
    #[command(name = "sitegen", version, about = "Build code-snippet pages with copy-to-clipboard buttons")]
    struct Cli {
        /// Project root containing site.toml, content/ and theme/
        #[arg(long, env = "SITEGEN_ROOT", default_value = ".")]
        root: PathBuf,

        /// Config file (defaults to <root>/site.toml when present)
        #[arg(long, env = "SITEGEN_CONFIG")]
        config: Option<PathBuf>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand)]
    enum Command {
        /// Build every page of a project under content/pages/<PROJECT>
        Build { project: String },
        /// Print one source file as a highlighted code block
        Snippet {
            file: PathBuf,
            /// Language tag (guessed from the extension when omitted)
            #[arg(long)]
            language: Option<String>,
            /// Also dump the token stream to stderr as JSON
            #[arg(long)]
            tokens: bool,
        },
        /// Serve the output directory for preview
        Serve {
            /// Listen address (overrides [server].addr)
            #[arg(long)]
            addr: Option<SocketAddr>,
        },
    }

    pub async fn run() -> Result<()> {
        fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with_writer(std::io::stderr)
            .init();

        let cli = Cli::parse();

        match cli.command {
            Command::Build { project } => {
                let config = SiteConfig::load(&cli.root, cli.config.as_deref())?;
                let pages = generator::build_project(&config, &project)?;
                info!("Built {} page(s) into {}", pages.len(), config.output_dir.display());
            }
            Command::Snippet { file, language, tokens } => {
                let feedback = match SiteConfig::load(&cli.root, cli.config.as_deref()) {
                    Ok(config) => config.copy_feedback,
                    Err(e) => {
                        debug!("No site config ({:#}); using default copy feedback", e);
                        CopyFeedback::default()
                    }
                };

                if tokens {
                    let (_, stream) = generator::tokenize_file(&file, language.as_deref())?;
                    eprintln!("{}", serde_json::to_string_pretty(&stream)?);
                }

                let html = generator::render_snippet(&file, language.as_deref(), feedback)?;
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", html)?;
            }
            Command::Serve { addr } => {
                let config = SiteConfig::load(&cli.root, cli.config.as_deref())?;
                let addr = addr.unwrap_or(config.server_addr);
                snippet_site::server::serve(&config.output_dir, addr).await?;
            }
        }

        Ok(())
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The CLI needs the `ssr` feature; the library is the WASM entry point.
}
