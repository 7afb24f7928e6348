use crate::{
    error::Error,
    searcher::response::{SearchResponse, SearchResult},
    utils::any::Any,
};
use reqwest::Client as ReqwestClient;
use url::Url;

#[derive(Clone)]
pub struct SearchApi {
    client: ReqwestClient,
    endpoint: Url,
}

impl SearchApi {
    const QUERY_PARAM: &'static str = "search";

    pub fn new(endpoint: Url) -> Self {
        let client = ReqwestClient::new();

        Self { client, endpoint }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, Error> {
        let mut url = self.endpoint.clone();

        url.query_pairs_mut().append_pair(Self::QUERY_PARAM, query);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Error::UnableToFetch.err();
        }

        let response = response.text().await?.deserialize_from_json::<SearchResponse>()?;

        response.search_results.ok()
    }
}
