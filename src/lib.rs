pub mod app;
pub mod data;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod validate;

pub use app::QuizApp;
