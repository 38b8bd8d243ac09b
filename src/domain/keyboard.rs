use crate::domain::value::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// What happens when a button is tapped (`ActionType`).
pub enum ActionType {
    /// Sends `ActionBody` back to the bot as a message.
    #[default]
    Reply,
    /// Opens `ActionBody` as a URL.
    OpenUrl,
    LocationPicker,
    SharePhone,
    None,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reply => "reply",
            Self::OpenUrl => "open-url",
            Self::LocationPicker => "location-picker",
            Self::SharePhone => "share-phone",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSize {
    Small,
    Regular,
    Large,
}

impl TextSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Regular => "regular",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

impl TextVAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

impl TextHAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Visibility of the text input field while a keyboard is shown (API level 4).
pub enum InputFieldState {
    #[default]
    Regular,
    Minimized,
    Hidden,
}

impl InputFieldState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Minimized => "minimized",
            Self::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One grid cell of a keyboard or rich-media carousel.
///
/// Grid fit against the container's columns/rows is not checked here.
pub struct Button {
    pub columns: u8,
    pub rows: u8,
    pub action_type: ActionType,
    /// URL for [`ActionType::OpenUrl`], reply payload otherwise.
    pub action_body: String,
    pub bg_color: Option<Color>,
    pub image: Option<String>,
    pub text: Option<String>,
    pub text_size: Option<TextSize>,
    pub text_v_align: Option<TextVAlign>,
    pub text_h_align: Option<TextHAlign>,
    pub silent: bool,
}

impl Button {
    pub fn new(
        columns: u8,
        rows: u8,
        action_type: ActionType,
        action_body: impl Into<String>,
    ) -> Self {
        Self {
            columns,
            rows,
            action_type,
            action_body: action_body.into(),
            bg_color: None,
            image: None,
            text: None,
            text_size: None,
            text_v_align: None,
            text_h_align: None,
            silent: false,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_bg_color(mut self, color: Color) -> Self {
        self.bg_color = Some(color);
        self
    }

    pub fn with_text_size(mut self, size: TextSize) -> Self {
        self.text_size = Some(size);
        self
    }

    pub fn with_text_v_align(mut self, align: TextVAlign) -> Self {
        self.text_v_align = Some(align);
        self
    }

    pub fn with_text_h_align(mut self, align: TextHAlign) -> Self {
        self.text_h_align = Some(align);
        self
    }

    /// Suppress the reply message bubble in the chat when tapped.
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Custom keyboard attached to an outgoing message.
///
/// Buttons are kept in display order; [`Keyboard::add_buttons`] only appends.
pub struct Keyboard {
    default_height: bool,
    bg_color: Option<Color>,
    input_field_state: Option<InputFieldState>,
    buttons: Vec<Button>,
}

impl Keyboard {
    /// Wire discriminant (`Type`).
    pub const TYPE: &'static str = "keyboard";

    /// Create an empty keyboard. `None` leaves the background color to the client.
    pub fn new(bg_color: Option<Color>, default_height: bool) -> Self {
        Self {
            default_height,
            bg_color,
            input_field_state: None,
            buttons: Vec::new(),
        }
    }

    pub fn with_input_field_state(mut self, state: InputFieldState) -> Self {
        self.input_field_state = Some(state);
        self
    }

    /// Append buttons after the existing ones, keeping their order.
    pub fn add_buttons(&mut self, buttons: impl IntoIterator<Item = Button>) {
        self.buttons.extend(buttons);
    }

    pub fn default_height(&self) -> bool {
        self.default_height
    }

    pub fn bg_color(&self) -> Option<&Color> {
        self.bg_color.as_ref()
    }

    pub fn input_field_state(&self) -> Option<InputFieldState> {
        self.input_field_state
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Carousel-style grid of buttons sent as a rich media message.
pub struct RichMedia {
    buttons_group_columns: u8,
    buttons_group_rows: u8,
    bg_color: Option<Color>,
    buttons: Vec<Button>,
}

impl RichMedia {
    /// Wire discriminant (`Type`).
    pub const TYPE: &'static str = "rich_media";

    pub fn new(buttons_group_columns: u8, buttons_group_rows: u8) -> Self {
        Self {
            buttons_group_columns,
            buttons_group_rows,
            bg_color: None,
            buttons: Vec::new(),
        }
    }

    pub fn with_bg_color(mut self, color: Color) -> Self {
        self.bg_color = Some(color);
        self
    }

    /// Append buttons after the existing ones, keeping their order.
    pub fn add_buttons(&mut self, buttons: impl IntoIterator<Item = Button>) {
        self.buttons.extend(buttons);
    }

    pub fn buttons_group_columns(&self) -> u8 {
        self.buttons_group_columns
    }

    pub fn buttons_group_rows(&self) -> u8 {
        self.buttons_group_rows
    }

    pub fn bg_color(&self) -> Option<&Color> {
        self.bg_color.as_ref()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }
}
