use std::io;
use std::process;

use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use fitcoach::{CoachRepl, GroqClient, Provider};

#[tokio::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    // Logs go to stderr so they never interleave with the chat transcript.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let client = match GroqClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error during API client setup: {e}");
            eprintln!(
                "Please make sure your {} is set correctly.",
                Provider::Groq.default_api_key_env_var()
            );
            process::exit(1);
        }
    };

    let repl = CoachRepl::new(client);
    let stdin = io::stdin();
    repl.run(stdin.lock(), io::stdout()).await
}
