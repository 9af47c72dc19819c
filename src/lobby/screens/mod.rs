//! Screen implementations for the three lobby views.

mod landing;
mod playing;
mod waiting;

pub use landing::LandingScreen;
pub use playing::PlayingScreen;
pub use waiting::WaitingScreen;
