use std::io::Write;
use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use xinjie_core::{InterpretationRequest, InterpretationService};

const GREETING: &str = "说吧, 他们又用哪个词来忽悠你了?";
const EXIT_WORDS: [&str; 3] = ["exit", "quit", "退出"];

/// One CLI run: a service plus where and how results go
pub struct Session {
    service: InterpretationService,
    model: String,
    output: PathBuf,
    json: bool,
}

impl Session {
    pub fn new(service: InterpretationService, model: String, output: PathBuf, json: bool) -> Self {
        Self {
            service,
            model,
            output,
            json,
        }
    }

    /// Interpret one word. `Ok(false)` when the request was rejected or cancelled.
    pub async fn run_once(&self, word: &str, cancel: &CancellationToken) -> anyhow::Result<bool> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!("Request for '{word}' cancelled");
                Ok(false)
            }
            result = self.process(word) => result,
        }
    }

    /// Read words from stdin until an exit word, EOF or Ctrl+C
    pub async fn run_interactive(&self, cancel: &CancellationToken) -> anyhow::Result<()> {
        println!("{GREETING}");

        let prompt = atty::is(atty::Stream::Stdin);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            if prompt {
                print!("> ");
                std::io::stdout().flush()?;
            }

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = cancel.cancelled() => break,
            };
            let Some(line) = line else {
                break;
            };

            let word = line.trim();
            if is_exit_word(word) {
                break;
            }
            if word.is_empty() {
                continue;
            }

            self.run_once(word, cancel).await?;
            if cancel.is_cancelled() {
                break;
            }
        }

        Ok(())
    }

    async fn process(&self, word: &str) -> anyhow::Result<bool> {
        if self.json {
            let response = self.service.handle(word, &self.model).await;
            println!("{}", response.to_json());
            return Ok(response.status() == 200);
        }

        let request = match InterpretationRequest::new(word, &self.model) {
            Ok(request) => request,
            Err(e) => {
                eprintln!("{e}");
                return Ok(false);
            }
        };

        match self.service.respond(&request).await {
            Ok(card) => {
                tokio::fs::write(&self.output, &card.svg).await?;
                tracing::info!("Card written to {}", self.output.display());
                println!("\n{}\n", card.interpretation);
                Ok(true)
            }
            Err(e) => {
                eprintln!("{e}");
                Ok(false)
            }
        }
    }
}

fn is_exit_word(word: &str) -> bool {
    EXIT_WORDS
        .iter()
        .any(|exit| word.eq_ignore_ascii_case(exit))
}
