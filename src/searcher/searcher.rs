use crate::{
    config::Config,
    error::Error,
    searcher::{debounce::Debounce, response::SearchResult},
    utils::any::Any,
};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Eq, PartialEq)]
pub enum State {
    Idle,
    Loading,
    Results(usize),
    Empty,
    Error(String),
}

#[derive(Debug)]
pub struct Dispatch {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct Outcome {
    pub generation: u64,
    pub query: String,
    pub result: Result<Vec<SearchResult>, Error>,
}

pub struct Searcher {
    input: String,
    results: Vec<SearchResult>,
    status: String,
    state: State,
    debounce: Debounce,
    generation: u64,
    dispatch: Option<Dispatch>,
}

impl Searcher {
    const IDLE_STATUS: &'static str = "Type to begin searching.";
    const CLEARED_STATUS: &'static str = "Cleared. Type to begin searching.";

    pub fn new(config: &Config) -> Self {
        let debounce = Debounce::new(Duration::from_millis(config.debounce_ms));

        Self {
            input: String::new(),
            results: Vec::new(),
            status: Self::IDLE_STATUS.into(),
            state: State::Idle,
            debounce,
            generation: 0,
            dispatch: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    pub fn seed(&mut self, text: &str) {
        self.input.push_str(text);
    }

    pub fn push_char(&mut self, chr: char) {
        self.input.push(chr);
        self.debounce.restart();
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.debounce.restart();
    }

    // NOTE: the debounce reads the input as it is when the deadline expires, not as it was when
    // the deadline was set; a clear() in between therefore lands in Idle instead of replaying the
    // cleared text
    pub fn fire(&mut self) {
        self.debounce.cancel();
        self.search();
    }

    // NOTE: submitting does not cancel a pending deadline; if the deadline later expires it issues
    // a younger generation for the same input and the generation check in finish() keeps the
    // renders consistent
    pub fn submit(&mut self) {
        self.search();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.results.clear();
        self.state = State::Idle;
        self.status = Self::CLEARED_STATUS.into();
    }

    pub fn take_dispatch(&mut self) -> Option<Dispatch> {
        self.dispatch.take()
    }

    fn search(&mut self) {
        let query = self.input.trim().to_owned();

        if query.is_empty() {
            self.results.clear();
            self.state = State::Idle;
            self.status = Self::IDLE_STATUS.into();

            return;
        }

        self.generation += 1;
        self.results.clear();
        self.state = State::Loading;
        self.status = std::format!("Searching for \"{query}\"...");
        self.dispatch = Dispatch {
            generation: self.generation,
            query,
        }
        .some();
    }

    pub fn finish(&mut self, outcome: Outcome) {
        let Outcome {
            generation,
            query,
            result,
        } = outcome;

        if generation != self.generation {
            return tracing::info!(stale_generation = generation, latest_generation = self.generation);
        }

        match result {
            Ok(results) if results.is_empty() => {
                self.state = State::Empty;
                self.status = std::format!("No results for \"{query}\"");
            }
            Ok(results) => {
                self.status = std::format!("Showing {count} result(s) for \"{query}\"", count = results.len());
                self.state = State::Results(results.len());
                self.results = results;
            }
            Err(error) => {
                self.status = error.to_string();
                self.state = State::Error(self.status.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::any::Any;

    fn searcher() -> Searcher {
        Searcher::new(&"{}".deserialize_from_yaml::<Config>().unwrap())
    }

    fn results(json: &str) -> Vec<SearchResult> {
        json.deserialize_from_json().unwrap()
    }

    fn outcome(dispatch: Dispatch, result: Result<Vec<SearchResult>, Error>) -> Outcome {
        Outcome {
            generation: dispatch.generation,
            query: dispatch.query,
            result,
        }
    }

    #[test]
    fn blank_queries_land_in_idle_without_a_dispatch() {
        let mut searcher = searcher();

        searcher.push_char(' ');
        searcher.submit();

        assert_eq!(searcher.state(), &State::Idle);
        assert_eq!(searcher.status(), "Type to begin searching.");
        assert!(searcher.take_dispatch().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn input_restarts_the_debounce_deadline() {
        let mut searcher = searcher();

        searcher.push_char('a');

        let first = searcher.deadline().unwrap();

        assert_eq!(first, Instant::now() + Duration::from_millis(450));

        tokio::time::advance(Duration::from_millis(200)).await;
        searcher.pop_char();

        let second = searcher.deadline().unwrap();

        assert_eq!(second, Instant::now() + Duration::from_millis(450));
        assert!(second > first);
    }

    #[test]
    fn debounced_input_fires_one_search_with_the_final_text() {
        let mut searcher = searcher();

        for chr in "rust".chars() {
            searcher.push_char(chr);
        }

        searcher.fire();

        let dispatch = searcher.take_dispatch().unwrap();

        assert_eq!(dispatch.generation, 1);
        assert_eq!(dispatch.query, "rust");
        assert!(searcher.take_dispatch().is_none());
        assert!(searcher.deadline().is_none());
        assert_eq!(searcher.state(), &State::Loading);
        assert_eq!(searcher.status(), "Searching for \"rust\"...");
    }

    #[test]
    fn queries_are_trimmed_before_dispatch() {
        let mut searcher = searcher();

        searcher.seed("  rust  ");
        searcher.submit();

        assert_eq!(searcher.take_dispatch().unwrap().query, "rust");
    }

    #[test]
    fn empty_outcomes_land_in_the_empty_state() {
        let mut searcher = searcher();

        searcher.seed("x");
        searcher.submit();

        let dispatch = searcher.take_dispatch().unwrap();

        searcher.finish(outcome(dispatch, Ok(Vec::new())));

        assert_eq!(searcher.state(), &State::Empty);
        assert_eq!(searcher.status(), "No results for \"x\"");
        assert!(searcher.results().is_empty());
    }

    #[test]
    fn result_outcomes_are_kept_in_arrival_order() {
        let mut searcher = searcher();

        searcher.seed("x");
        searcher.submit();

        let dispatch = searcher.take_dispatch().unwrap();

        searcher.finish(outcome(dispatch, Ok(results(r#"[{"link":"b"},{"link":"a"}]"#))));

        assert_eq!(searcher.state(), &State::Results(2));
        assert_eq!(searcher.status(), "Showing 2 result(s) for \"x\"");
        assert_eq!(searcher.results()[0].link(), "b");
        assert_eq!(searcher.results()[1].link(), "a");
    }

    #[test]
    fn failed_outcomes_surface_the_error_message() {
        let mut searcher = searcher();

        searcher.seed("x");
        searcher.submit();

        let dispatch = searcher.take_dispatch().unwrap();

        searcher.finish(outcome(dispatch, Err(Error::UnableToFetch)));

        assert_eq!(searcher.state(), &State::Error("Unable to fetch results".into()));
        assert_eq!(searcher.status(), "Unable to fetch results");
        assert!(searcher.results().is_empty());
    }

    #[test]
    fn stale_outcomes_are_discarded() {
        let mut searcher = searcher();

        searcher.seed("rust");
        searcher.submit();

        let stale = searcher.take_dispatch().unwrap();

        searcher.push_char('!');
        searcher.submit();

        let latest = searcher.take_dispatch().unwrap();

        searcher.finish(outcome(stale, Ok(results(r#"[{"link":"a"}]"#))));

        assert_eq!(searcher.state(), &State::Loading);
        assert_eq!(searcher.status(), "Searching for \"rust!\"...");

        searcher.finish(outcome(latest, Ok(Vec::new())));

        assert_eq!(searcher.state(), &State::Empty);
        assert_eq!(searcher.status(), "No results for \"rust!\"");
    }

    #[test]
    fn submit_leaves_a_pending_deadline_in_place() {
        let mut searcher = searcher();

        searcher.push_char('a');
        searcher.submit();

        assert!(searcher.take_dispatch().is_some());
        assert!(searcher.deadline().is_some());
    }

    #[test]
    fn clear_resets_input_results_and_status() {
        let mut searcher = searcher();

        searcher.seed("x");
        searcher.submit();

        let dispatch = searcher.take_dispatch().unwrap();

        searcher.finish(outcome(dispatch, Ok(results(r#"[{"link":"a"}]"#))));
        searcher.clear();

        assert_eq!(searcher.input(), "");
        assert!(searcher.results().is_empty());
        assert_eq!(searcher.state(), &State::Idle);
        assert_eq!(searcher.status(), "Cleared. Type to begin searching.");
    }

    #[test]
    fn a_deadline_expiring_after_clear_lands_in_idle() {
        let mut searcher = searcher();

        searcher.push_char('a');
        searcher.clear();
        searcher.fire();

        assert_eq!(searcher.state(), &State::Idle);
        assert_eq!(searcher.status(), "Type to begin searching.");
        assert!(searcher.take_dispatch().is_none());
    }
}
