use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    // NOTE: the endpoint omits the field entirely when it has nothing to return
    #[serde(default)]
    pub search_results: Vec<SearchResult>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchResult {
    link: String,
    title: Option<String>,
    description: Option<String>,
}

impl SearchResult {
    const DEFAULT_TITLE: &'static str = "Untitled";
    const DEFAULT_DESCRIPTION: &'static str = "No description available.";

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(Self::DEFAULT_TITLE)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(Self::DEFAULT_DESCRIPTION)
    }
}
