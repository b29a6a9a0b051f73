//! Conversation layer: the [`Chatbot`] entry point, response selection and
//! interactive sessions.

pub mod bot;
pub mod selector;
pub mod session;

pub use bot::{Chatbot, ChatbotBuilder};
pub use selector::{FirstSelector, RandomSelector, ResponseSelector, RoundRobinSelector};
pub use session::{Session, Turn};
