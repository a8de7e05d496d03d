/*
[INPUT]:  CHIMONEY_API_KEY environment variable
[OUTPUT]: Sandbox reference data and wallet balance
[POS]:    Examples - read-only sandbox walkthrough
[UPDATE]: When adding new read-only endpoints
*/

use chimoney_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: walk the sandbox reference endpoints
///
/// Run with `RUST_LOG=chimoney_adapter=debug` to see each request.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Chimoney Sandbox Tour ===\n");

    let api_key = match ApiKey::from_env() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Set {} first: {}", API_KEY_ENV_VAR, e);
            return;
        }
    };

    let client = match ChimoneyClient::sandbox(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client ready at {}\n", client.base_url());

    let info = client.info();

    println!("Querying airtime countries...");
    match info.airtime_countries().await {
        Ok(envelope) => match envelope.data_as::<Vec<String>>() {
            Ok(countries) => println!("✓ {} countries", countries.len()),
            Err(e) => println!("✗ Unexpected payload: {}", e),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying Ghanaian banks...");
    match info.banks("GH").await {
        Ok(envelope) => match envelope.data_as::<Vec<serde_json::Value>>() {
            Ok(banks) => println!("✓ {} banks", banks.len()),
            Err(e) => println!("✗ Unexpected payload: {}", e),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nConverting 1 USD to NGN...");
    match info.usd_in_local_amount("NGN", Decimal::ONE).await {
        Ok(envelope) => println!("✓ {}", envelope.data().map(|d| d.get()).unwrap_or("null")),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying wallet balance...");
    match client.wallet().balance(None).await {
        Ok(envelope) => println!("✓ status {:?}", envelope.status),
        Err(e) if e.is_retryable() => println!("✗ Temporary failure: {}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n=== Tour Complete ===");
}
