use crate::{
    error::Error,
    searcher::{
        response::SearchResult,
        searcher::{Searcher, State},
    },
    utils::any::Any,
    view::terminal::Terminal,
};
use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

pub struct View {
    terminal: Terminal,
    offset: usize,
    generation: u64,
}

impl View {
    const PROMPT: &'static str = "search: ";
    const SPINNER: &'static str = "⋯";
    const EMPTY_MESSAGE: &'static str = "No results found. Try a different keyword.";
    const ERROR_MESSAGE: &'static str = "Something went wrong. Please try again.";

    pub fn new(size: (u16, u16)) -> Self {
        let terminal = Terminal::new(size.rect());

        Self {
            terminal,
            offset: 0,
            generation: 0,
        }
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal.resize((width, height).rect());
    }

    fn entry(result: &SearchResult) -> [Line<'_>; 4] {
        [
            result.title().bold().convert::<Line>(),
            result.link().underlined().convert::<Line>(),
            result.description().dim().convert::<Line>(),
            Line::default(),
        ]
    }

    fn body(searcher: &Searcher) -> Vec<Line<'_>> {
        match searcher.state() {
            State::Idle => std::vec![],
            State::Loading => std::vec![Self::SPINNER.dim().convert::<Line>()],
            State::Empty => std::vec![Self::EMPTY_MESSAGE.italic().convert::<Line>()],
            State::Error(_message) => std::vec![Self::ERROR_MESSAGE.italic().convert::<Line>()],
            State::Results(_count) => searcher.results().iter().flat_map(Self::entry).collect(),
        }
    }

    pub fn render(&mut self, searcher: &Searcher) -> Result<Vec<u8>, Error> {
        // NOTE: the scroll offset belongs to one generation of results; reset it when a younger
        // generation replaces them
        if self.generation != searcher.generation() {
            self.generation = searcher.generation();
            self.offset = 0;
        }

        let input_line = std::format!("{prompt}{input}", prompt = Self::PROMPT, input = searcher.input())
            .reversed()
            .convert::<Line>();
        let status_line = searcher.status().dim().convert::<Line>();
        let body = Self::body(searcher);

        self.offset = self.offset.min(body.len().saturating_sub(1));

        let lines = input_line
            .once()
            .chain(status_line.once())
            .chain(body.into_iter().skip(self.offset))
            .collect::<Vec<_>>();
        let paragraph = Paragraph::new(lines);

        self.terminal.render_widget(paragraph, self.terminal.area());

        self.terminal.finish()
    }
}
