//! Page components for iPlantGuard routes.

mod chatbot;
mod home;

pub use chatbot::Chatbot;
pub use home::Home;
