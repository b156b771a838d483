mod clock;
mod error;
mod sun_times;

use clock::SystemClock;
use sun_times::QueryConfig;
use tracing_subscriber::EnvFilter;

/// The main function initializes the tracing subscriber, queries the
/// sunrise-sunset.org API for the fixed coordinate, and prints two lines on
/// success: the raw JSON payload and the signed duration remaining until
/// sunset.
///
/// A non-success HTTP status or a rejected request envelope skips both lines
/// and the process still exits cleanly; a payload that cannot be parsed
/// propagates as an error and terminates with a non-zero exit status.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = QueryConfig::default();
    let client = reqwest::Client::new();

    if let Some(report) = sun_times::fetch_sun_report(&client, &config).await? {
        println!("{}", report.raw_json);
        println!("{}", sun_times::time_until_sunset(&report, &SystemClock));
    }

    Ok(())
}
