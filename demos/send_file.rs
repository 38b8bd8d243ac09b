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
    let media = std::env::var("VIBER_MEDIA_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VIBER_MEDIA_URL environment variable is required",
        )
    })?;

    let client = ViberClient::new(AuthToken::new(token)?, Sender::new("viberpa demo")?);
    let caption = "Here you go";
    let message = client.new_probed_file_message(caption, media, "").await;
    println!("sending as {}", message.kind().as_str());

    let token = client.send_message(&UserId::new(receiver)?, message).await?;
    println!("message_token: {}", token.value());

    Ok(())
}
