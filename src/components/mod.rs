pub mod chat_preview;
pub mod chat_script;
pub mod faq;
pub mod use_cases;
