use blitzquiz::Config;
use source::Fetcher;
use std::io;
use tokio::{io::BufReader, runtime::Runtime, signal};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let Config { endpoint, proxy, limit } = Config::from_env()?;

    let runtime = Runtime::new()?;
    let result = runtime.block_on(async {
        let fetcher = Fetcher::new(&endpoint, proxy.as_deref())?;
        let input = BufReader::new(tokio::io::stdin());
        tokio::select! {
            result = blitzquiz::run(&fetcher, limit, input, io::stdout()) => result.map(drop),
            _ = signal::ctrl_c() => {
                log::info!("Interrupted. Shutting down.");
                Ok(())
            }
        }
    });

    // A pending stdin read would otherwise hold the runtime open.
    runtime.shutdown_background();
    result
}
