use clap::Parser;
use sentiment_demo::analysis::Analysis;
use sentiment_demo::cli::{ArtifactArgs, Cli, Commands};
use sentiment_demo::config::DemoConfig;
use sentiment_demo::server::run_server;
use sentiment_demo::state::AppState;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            artifacts,
            port,
            address,
            verbose,
        } => {
            init_logging(verbose);

            let state = load_state(&artifacts)?;
            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;

            println!();
            println!("  Sentiment Analysis demo");
            println!();
            for message in state.load_errors.iter() {
                println!("  ! {}", message);
            }
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(state, addr).await?;
        }

        Commands::Predict {
            text,
            artifacts,
            verbose,
        } => {
            init_logging(verbose);

            let state = load_state(&artifacts)?;
            for message in state.load_errors.iter() {
                eprintln!("{}", message);
            }

            let analysis = Analysis::run(&state.pipeline, &text);
            if matches!(analysis, Analysis::Error(_)) {
                for line in analysis.summary_lines() {
                    eprintln!("{}", line);
                }
                anyhow::bail!("sentiment analysis failed");
            }

            for line in analysis.summary_lines() {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn load_state(args: &ArtifactArgs) -> anyhow::Result<AppState> {
    let config = DemoConfig::load(&args.config, args)?;
    tracing::info!("Model: {}", config.artifacts.model_path.display());
    tracing::info!("Tokenizer: {}", config.artifacts.tokenizer_path.display());
    AppState::from_config(&config)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "sentiment_demo=debug,sentiment_classifiers=debug,tower_http=debug"
    } else {
        "sentiment_demo=info,sentiment_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
