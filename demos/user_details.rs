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
    let user_id = std::env::var("VIBER_USER_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VIBER_USER_ID environment variable is required",
        )
    })?;

    let client = ViberClient::new(AuthToken::new(token)?, Sender::new("viberpa demo")?);
    let id = UserId::new(user_id)?;

    let details = client.user_details(&id).await?;
    println!("user: {:?}", details.user);

    for user in client.user_online(vec![id]).await? {
        println!(
            "{}: {:?} ({})",
            user.id, user.online_status, user.online_status_message
        );
    }

    Ok(())
}
