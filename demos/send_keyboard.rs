use std::io;

use viberpa::{
    ActionType, AuthToken, Button, Color, InputFieldState, Keyboard, Sender, TextSize, UserId,
    ViberClient,
};

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

    let client = ViberClient::builder(AuthToken::new(token)?, Sender::new("viberpa demo")?)
        .min_api_version(4)
        .build()?;

    let mut keyboard = Keyboard::new(Some(Color::new("#FFFFFF")?), false)
        .with_input_field_state(InputFieldState::Minimized);
    keyboard.add_buttons([
        Button::new(3, 1, ActionType::Reply, "yes").with_text("Yes"),
        Button::new(3, 1, ActionType::Reply, "no").with_text("No"),
        Button::new(6, 1, ActionType::OpenUrl, "https://www.viber.com")
            .with_text("Learn more")
            .with_text_size(TextSize::Small),
    ]);

    let message = client
        .new_text_message("Do you like it?")
        .with_tracking_data("survey-1")
        .with_keyboard(keyboard);
    let token = client.send_message(&UserId::new(receiver)?, message).await?;
    println!("message_token: {}", token.value());

    Ok(())
}
