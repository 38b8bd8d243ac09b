use std::io;

use viberpa::{AuthToken, EventType, Sender, ViberClient, WebhookUrl};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("VIBER_AUTH_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VIBER_AUTH_TOKEN environment variable is required",
        )
    })?;

    let client = ViberClient::new(AuthToken::new(token)?, Sender::new("viberpa demo")?);

    // Without VIBER_WEBHOOK_URL the current webhook is removed.
    let response = match std::env::var("VIBER_WEBHOOK_URL") {
        Ok(url) => {
            let url = WebhookUrl::new(url)?;
            client
                .set_webhook(&url, Some(&[EventType::Delivered, EventType::Seen]))
                .await?
        }
        Err(_) => client.remove_webhook().await?,
    };
    println!(
        "status: {}, status_message: {}, event_types: {:?}",
        response.status.as_i32(),
        response.status_message,
        response.event_types
    );

    Ok(())
}
