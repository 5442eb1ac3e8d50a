use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use xinjie_core::InterpretationService;

mod logging;
mod session;
mod settings;

use self::session::Session;

/// 汉语新解: satirical reinterpretations of Chinese words, rendered as SVG cards
#[derive(Parser, Debug)]
#[command(name = "xinjie", version)]
struct Cli {
    /// Word to interpret; starts an interactive session when omitted
    word: Option<String>,

    /// Model: default, openai, zhipuai, qwen or gemini
    #[arg(short, long)]
    model: Option<String>,

    /// Where the card is written
    #[arg(short, long, default_value = "output.svg")]
    output: PathBuf,

    /// Print the JSON response (`{"svg"}` / `{"error"}`) instead of writing a file
    #[arg(long)]
    json: bool,

    /// JSON config file; environment variables are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // .env is optional
    dotenvy::dotenv().ok();
    logging::init(cli.log_json);

    let config = settings::load_config(cli.config.as_deref())?;
    let model = cli
        .model
        .unwrap_or_else(|| config.service.default_model.clone());

    let service = InterpretationService::from_config(&config);
    tracing::info!(
        "Models available: {:?}",
        service.registry().models()
    );

    // Ctrl+C abandons the in-flight request
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown requested");
                cancel.cancel();
            }
        }
    });

    let session = Session::new(service, model, cli.output, cli.json);

    match cli.word {
        Some(word) => {
            let ok = session.run_once(&word, &cancel).await?;
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        None => {
            session.run_interactive(&cancel).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
