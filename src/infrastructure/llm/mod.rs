mod openai_client;

pub use openai_client::{DEFAULT_REQUEST_TIMEOUT, OpenAiClient};
