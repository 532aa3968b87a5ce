use dioxus::prelude::*;

#[component]
pub fn VideoPlayer(url: String) -> Element {
    rsx! {
        video {
            class: "video-player",
            controls: true,
            preload: "metadata",
            src: "{url}",
        }
    }
}
