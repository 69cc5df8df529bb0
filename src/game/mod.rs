//! The external surface: game sessions and their read projection.

pub mod session;
pub mod view;

pub use session::GameSession;
pub use view::BoardView;
