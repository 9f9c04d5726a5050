pub mod arcade;
pub mod classic;
pub mod session;
mod terminal;

pub use arcade::ArcadeMode;
pub use classic::ClassicMode;
pub use session::Session;
