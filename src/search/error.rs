use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SearchError {
    #[error("Failed to build search engine client")]
    #[diagnostic(code(todos::search::client))]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to reach search engine at {url}")]
    #[diagnostic(
        code(todos::search::connection_failed),
        help(
            "Is the search engine running? Point --search-url or TODOS_SEARCH_URL at it, or start with --indexing skip."
        )
    )]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Search engine rejected indexing request ({status}): {message}")]
    #[diagnostic(code(todos::search::rejected))]
    Rejected { status: u16, message: String },
}

pub type SearchResult<T> = Result<T, SearchError>;
