//! UI primitives (Avatar, Button, Icon, Input, VideoPlayer)

pub mod avatar;
pub mod button;
pub mod icon;
pub mod input;
pub mod video_player;

pub use avatar::*;
pub use button::*;
pub use icon::*;
pub use input::*;
pub use video_player::*;
