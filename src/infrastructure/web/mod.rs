mod html_content;
mod web_page_adapter;

pub use html_content::extract_main_text;
pub use web_page_adapter::{
    DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT, WebPageAdapter, is_http_url,
};
