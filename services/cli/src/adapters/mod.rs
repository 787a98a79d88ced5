pub mod graphql;
pub mod html;
pub mod session;

pub use graphql::LeetCodeGraphQlAdapter;
pub use html::Html2TextRenderer;
pub use session::{BrowserCookieAdapter, StaticTokenAdapter};
