use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pizzaduchefin::application::order_flow::OrderFlow;
use pizzaduchefin::config::{Locale, Settings};
use pizzaduchefin::infrastructure::terminal::TerminalConsole;
use pizzaduchefin::logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Language of prompts and messages
    #[arg(long, value_enum, default_value_t = Locale::En)]
    lang: Locale,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let settings = Settings::new(cli.lang);
    let mut flow = OrderFlow::new(TerminalConsole::stdio(), settings.messages());

    // Aborted orders still end the process normally
    flow.run().await.into_diagnostic()?;

    Ok(())
}
