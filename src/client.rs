use crate::{
    cli_args::CliArgs,
    config::Config,
    error::Error,
    keymap::{Command, Keymap},
    searcher::{
        api::SearchApi,
        searcher::{Dispatch, Outcome, Searcher},
    },
    utils::any::Any,
    view::view::View,
};
use crossterm::{
    cursor::{Hide, Show},
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream as CrosstermEventStream, KeyCode, KeyEvent,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    QueueableCommand,
};
use futures::StreamExt;
use std::{
    io::{StdoutLock, Write},
    sync::Mutex,
};
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedSender},
    time::Instant,
};
use url::Url;

macro_rules! mouse_pattern {
    ($variant:ident) => {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::$variant,
            ..
        })
    };
}

pub struct Client {
    stdout: StdoutLock<'static>,
    args: CliArgs,
    keymap: Keymap,
    searcher: Searcher,
    view: View,
    api: SearchApi,
    sender: UnboundedSender<Outcome>,
}

impl Client {
    const DEFAULT_CONFIG_STR: &'static str = std::include_str!("config.yaml");

    fn new(args: CliArgs, sender: UnboundedSender<Outcome>) -> Result<Self, Error> {
        let config = Self::config(&args)?;
        let endpoint = Self::endpoint(&args, &config)?;
        let searcher = Searcher::new(&config);
        let keymap = Keymap::new(config.keymap);
        let view = View::new(crossterm::terminal::size()?);
        let api = SearchApi::new(endpoint);
        let stdout = std::io::stdout().lock();
        let mut client = Self {
            stdout,
            args,
            keymap,
            searcher,
            view,
            api,
            sender,
        };

        client.on_init()?;

        client.ok()
    }

    fn config(args: &CliArgs) -> Result<Config, Error> {
        if let Some(config_filepath) = &args.config_filepath {
            config_filepath.read_to_string()?.deserialize_from_yaml::<Config>()?.ok()
        } else {
            Self::DEFAULT_CONFIG_STR.deserialize_from_yaml::<Config>()?.ok()
        }
    }

    fn endpoint(args: &CliArgs, config: &Config) -> Result<Url, Error> {
        match &args.endpoint {
            Some(endpoint) => endpoint.clone().ok(),
            None => config.endpoint.parse::<Url>()?.ok(),
        }
    }

    fn init_tracing(&self) -> Result<(), Error> {
        let Some(log_filepath) = self.args.log_filepath.as_ref() else {
            return ().ok();
        };
        let writer = log_filepath.create()?.buf_writer();
        let writer = Mutex::new(writer);

        // TODO: consider using tracing-appender for writing to a file
        tracing_subscriber::fmt().with_writer(writer).json().init();

        ().ok()
    }

    fn on_init(&mut self) -> Result<(), Error> {
        self.init_tracing()?;
        crossterm::terminal::enable_raw_mode()?;
        self.stdout
            .queue(EnterAlternateScreen)?
            .queue(EnableMouseCapture)?
            .queue(Hide)?
            .queue(Clear(ClearType::All))?
            .flush()?;

        ().ok()
    }

    fn on_drop(&mut self) -> Result<(), Error> {
        crossterm::terminal::disable_raw_mode()?;
        self.stdout
            .queue(LeaveAlternateScreen)?
            .queue(DisableMouseCapture)?
            .queue(Show)?
            .flush()?;

        ().ok()
    }

    fn feed(&mut self, event: Event) -> Result<bool, Error> {
        match self.keymap.get(&[event]) {
            Ok(Command::Quit) => return true.ok(),
            Ok(Command::Submit) => self.searcher.submit(),
            Ok(Command::Clear) => self.searcher.clear(),
            Ok(Command::ScrollUp) | Err(&[mouse_pattern!(ScrollUp)]) => self.view.scroll_up(),
            Ok(Command::ScrollDown) | Err(&[mouse_pattern!(ScrollDown)]) => self.view.scroll_down(),
            Err(&[Event::Resize(width, height)]) => self.view.resize(width, height),
            Err(&[Event::Key(KeyEvent {
                code: KeyCode::Backspace,
                ..
            })]) => self.searcher.pop_char(),
            Err(&[Event::Key(KeyEvent {
                code: KeyCode::Char(chr),
                modifiers,
                ..
            })]) if KeyModifiers::SHIFT.contains(modifiers) => self.searcher.push_char(chr),
            ignored_event => tracing::info!(?ignored_event),
        }

        false.ok()
    }

    fn dispatch(&mut self) {
        let Some(dispatch) = self.searcher.take_dispatch() else {
            return;
        };
        let api = self.api.clone();
        let sender = self.sender.clone();

        tracing::info!(search_generation = dispatch.generation, search_query = %dispatch.query);

        tokio::spawn(async move {
            let Dispatch { generation, query } = dispatch;
            let result = api.search(&query).await;

            sender.send(Outcome { generation, query, result }).warn();
        });
    }

    fn refresh(&mut self) -> Result<(), Error> {
        let bytes = self.view.render(&self.searcher)?;

        if !bytes.is_empty() {
            self.stdout.write_all_and_flush(&bytes)?;
        }

        ().ok()
    }

    async fn debounce(deadline: Option<Instant>) {
        let Some(deadline) = deadline else { return };

        tokio::time::sleep_until(deadline).await;
    }

    pub async fn run(args: CliArgs) -> Result<(), Error> {
        let (sender, mut outcomes) = unbounded_channel();
        let mut client = Client::new(args, sender)?;
        let mut crossterm_events = CrosstermEventStream::new();

        if let Some(query) = client.args.query.take() {
            client.searcher.seed(&query);
            client.searcher.submit();
        }

        loop {
            client.dispatch();
            client.refresh()?;

            // NOTE: the deadline is read out before the select so the sleep future does not hold
            // a borrow of the searcher while another arm mutates it
            let deadline = client.searcher.deadline();

            tokio::select! {
                event_res_opt = crossterm_events.next() => {
                    let Some(event_res) = event_res_opt else { break; };

                    if client.feed(event_res?)? {
                        break;
                    }
                }
                () = Self::debounce(deadline), if deadline.is_some() => client.searcher.fire(),
                outcome_opt = outcomes.recv() => {
                    let Some(outcome) = outcome_opt else { break; };

                    client.searcher.finish(outcome);
                }
            }
        }

        ().ok()
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.on_drop().error();
    }
}
