use serde::Serialize;

use crate::domain::{Button, Keyboard, RichMedia};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyboardWire<'a> {
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    default_height: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    bg_color: Option<&'a str>,
    buttons: Vec<ButtonWire<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_field_state: Option<&'static str>,
}

impl<'a> From<&'a Keyboard> for KeyboardWire<'a> {
    fn from(keyboard: &'a Keyboard) -> Self {
        Self {
            kind: Keyboard::TYPE,
            default_height: keyboard.default_height(),
            bg_color: keyboard.bg_color().map(|c| c.as_str()),
            buttons: keyboard.buttons().iter().map(ButtonWire::from).collect(),
            input_field_state: keyboard.input_field_state().map(|state| state.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RichMediaWire<'a> {
    #[serde(rename = "Type")]
    kind: &'static str,
    buttons_group_columns: u8,
    buttons_group_rows: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    bg_color: Option<&'a str>,
    buttons: Vec<ButtonWire<'a>>,
}

impl<'a> From<&'a RichMedia> for RichMediaWire<'a> {
    fn from(rich_media: &'a RichMedia) -> Self {
        Self {
            kind: RichMedia::TYPE,
            buttons_group_columns: rich_media.buttons_group_columns(),
            buttons_group_rows: rich_media.buttons_group_rows(),
            bg_color: rich_media.bg_color().map(|c| c.as_str()),
            buttons: rich_media.buttons().iter().map(ButtonWire::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ButtonWire<'a> {
    columns: u8,
    rows: u8,
    action_type: &'static str,
    action_body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bg_color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_size: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_v_align: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_h_align: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    silent: bool,
}

impl<'a> From<&'a Button> for ButtonWire<'a> {
    fn from(button: &'a Button) -> Self {
        Self {
            columns: button.columns,
            rows: button.rows,
            action_type: button.action_type.as_str(),
            action_body: &button.action_body,
            bg_color: button.bg_color.as_ref().map(|c| c.as_str()),
            image: button.image.as_deref(),
            text: button.text.as_deref(),
            text_size: button.text_size.map(|it| it.as_str()),
            text_v_align: button.text_v_align.map(|it| it.as_str()),
            text_h_align: button.text_h_align.map(|it| it.as_str()),
            silent: button.silent,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{
        ActionType, Button, Color, InputFieldState, Keyboard, RichMedia, TextHAlign, TextSize,
        TextVAlign,
    };

    use super::*;

    #[test]
    fn keyboard_uses_pascal_case_keys_and_omits_unset_fields() {
        let mut keyboard = Keyboard::new(None, false);
        keyboard.add_buttons([Button::new(6, 1, ActionType::Reply, "yes").with_text("Yes")]);

        let value = serde_json::to_value(KeyboardWire::from(&keyboard)).unwrap();
        assert_eq!(
            value,
            json!({
                "Type": "keyboard",
                "Buttons": [
                    {
                        "Columns": 6,
                        "Rows": 1,
                        "ActionType": "reply",
                        "ActionBody": "yes",
                        "Text": "Yes"
                    }
                ]
            })
        );
    }

    #[test]
    fn keyboard_serializes_layout_flags() {
        let keyboard = Keyboard::new(Some(Color::new("#ffffff").unwrap()), true)
            .with_input_field_state(InputFieldState::Minimized);
        let value = serde_json::to_value(KeyboardWire::from(&keyboard)).unwrap();
        assert_eq!(value["DefaultHeight"], json!(true));
        assert_eq!(value["BgColor"], json!("#FFFFFF"));
        assert_eq!(value["InputFieldState"], json!("minimized"));
        assert_eq!(value["Buttons"], json!([]));
    }

    #[test]
    fn rich_media_carousel_wire_shape() {
        let mut rich_media = RichMedia::new(6, 6).with_bg_color(Color::new("#ffffff").unwrap());
        rich_media.add_buttons([
            Button::new(6, 3, ActionType::OpenUrl, "https://example.com/")
                .with_image("https://example.com/a.jpg"),
            Button::new(3, 1, ActionType::Reply, "ID: 21432323")
                .with_text("<font color=#ffffff>Open</font>")
                .with_text_size(TextSize::Large)
                .with_text_v_align(TextVAlign::Middle)
                .with_text_h_align(TextHAlign::Center)
                .with_silent(true),
        ]);

        let value = serde_json::to_value(RichMediaWire::from(&rich_media)).unwrap();
        assert_eq!(value["Type"], json!("rich_media"));
        assert_eq!(value["ButtonsGroupColumns"], json!(6));
        assert_eq!(value["ButtonsGroupRows"], json!(6));
        assert_eq!(value["BgColor"], json!("#FFFFFF"));
        assert_eq!(value["Buttons"][0]["ActionType"], json!("open-url"));
        assert_eq!(value["Buttons"][0]["Image"], json!("https://example.com/a.jpg"));
        assert_eq!(
            value["Buttons"][1],
            json!({
                "Columns": 3,
                "Rows": 1,
                "ActionType": "reply",
                "ActionBody": "ID: 21432323",
                "Text": "<font color=#ffffff>Open</font>",
                "TextSize": "large",
                "TextVAlign": "middle",
                "TextHAlign": "center",
                "Silent": true
            })
        );
    }
}
