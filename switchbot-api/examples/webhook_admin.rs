//! # Webhook Admin Example
//!
//! Lists the webhook subscriptions registered for an account, with the
//! full detail records where available.
//!
//! Run with:
//! ```bash
//! SWITCHBOT_TOKEN=... SWITCHBOT_SECRET=... cargo run --example webhook_admin
//! ```

use switchbot_api::SwitchBotClient;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (token, secret) = match (
        std::env::var("SWITCHBOT_TOKEN"),
        std::env::var("SWITCHBOT_SECRET"),
    ) {
        (Ok(token), Ok(secret)) => (token, secret),
        _ => {
            eprintln!("set SWITCHBOT_TOKEN and SWITCHBOT_SECRET first");
            std::process::exit(1);
        }
    };

    let client = SwitchBotClient::new(token, secret);
    let webhook = client.webhook();

    let urls = match webhook.query_urls() {
        Ok(urls) => urls,
        Err(err) => {
            eprintln!("query failed: {err}");
            std::process::exit(1);
        }
    };

    if urls.is_empty() {
        println!("no webhook registered");
        return;
    }

    match webhook.query_details(urls.clone()) {
        Ok(details) => {
            for record in details {
                println!(
                    "{} enable={} deviceList={} created={} updated={}",
                    record.url,
                    record.enable,
                    record.device_list,
                    record.create_time,
                    record.last_update_time
                );
            }
        }
        Err(err) => {
            // Some accounts reject detail queries; the plain list still helps
            eprintln!("detail query failed: {err}");
            for url in urls {
                println!("{url}");
            }
        }
    }
}
