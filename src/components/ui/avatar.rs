use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn class(self) -> &'static str {
        match self {
            Self::Medium => "avatar-medium",
            Self::Large => "avatar-large",
        }
    }
}

/// Upper-cased first character of a username, `?` when it is empty.
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[derive(Props, Clone, PartialEq)]
pub struct AvatarProps {
    pub username: String,
    #[props(optional)]
    pub size: Option<AvatarSize>,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let size = props.size.unwrap_or_default().class();
    let initial = avatar_initial(&props.username);

    rsx! {
        div {
            class: "avatar {size}",
            title: "{props.username}",
            "{initial}"
        }
    }
}
