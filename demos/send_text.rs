use std::io;

use viberpa::{AuthToken, Sender, UserId, ViberClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("VIBER_AUTH_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VIBER_AUTH_TOKEN environment variable is required",
        )
    })?;
    let receiver = std::env::var("VIBER_RECEIVER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VIBER_RECEIVER environment variable is required",
        )
    })?;
    let message = std::env::var("VIBER_MESSAGE")
        .unwrap_or_else(|_| "Hello from the viberpa demo.".to_owned());

    let client = ViberClient::new(AuthToken::new(token)?, Sender::new("viberpa demo")?);
    let token = client
        .send_text_message(&UserId::new(receiver)?, message)
        .await?;
    println!("message_token: {}", token.value());

    Ok(())
}
