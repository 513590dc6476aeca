use crate::{
    command::{Command, HELP},
    terminal,
    timer::Timer,
};
use core::future::{self, Future};
use model::Question;
use session::{Direction, Event, Session};
use source::QuestionSource;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// What the event loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Discard the session and fetch a fresh question set.
    Restart,
    Quit,
}

/// Terminal front-end of a single session: forwards input and clock ticks to the
/// session and prints whatever changed.
pub struct App<W> {
    session: Session,
    timer: Timer,
    limit: u32,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(limit: u32, out: W) -> Self {
        Self { session: Session::new(limit), timer: Timer::default(), limit, out }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn is_ticking(&self) -> bool {
        self.timer.is_running()
    }

    pub async fn tick(&mut self) {
        self.timer.tick().await
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to the quiz! Loading questions...")?;
        writeln!(self.out, "{HELP}")
    }

    pub fn on_loaded(&mut self, result: source::Result<Vec<Question>>) -> io::Result<()> {
        let questions = match result {
            Ok(questions) => questions,
            Err(err) => {
                log::error!("Error fetching quiz data: {err}");
                return terminal::message(&mut self.out, "Failed to load quiz data. Please try again.");
            }
        };

        let count = questions.len();
        match self.session.load(questions) {
            Ok(()) if count == 0 => terminal::message(&mut self.out, "The question set is empty."),
            Ok(()) => writeln!(self.out, "Loaded {count} questions. Type `start` to begin."),
            Err(err) => terminal::message(&mut self.out, err),
        }
    }

    pub fn on_tick(&mut self) -> io::Result<()> {
        let Some(event) = self.session.tick() else {
            return Ok(());
        };

        match event {
            Event::Countdown(label) => terminal::countdown(&mut self.out, label),
            Event::Begin => {
                // Realign the clock so the first quiz second is a full one.
                self.timer.start();
                terminal::clock(&mut self.out, self.session.remaining())?;
                self.show_question()
            }
            Event::Remaining(clock) if terminal::should_announce(clock) => terminal::clock(&mut self.out, clock),
            Event::Remaining(_) => Ok(()),
            Event::Expired => {
                self.timer.stop();
                writeln!(self.out, "Time is up!")?;
                self.show_report()
            }
        }
    }

    pub fn on_command(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Start => self.start()?,
            Command::Previous => self.navigate(Direction::Previous)?,
            Command::Next => self.navigate(Direction::Next)?,
            Command::Choose(option) => self.answer(option)?,
            Command::Submit => self.submit()?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Restart => return Ok(Flow::Restart),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Throws the current session away, as if the program had just been launched.
    pub fn restart(&mut self) -> io::Result<()> {
        self.timer.stop();
        self.session = Session::new(self.limit);
        writeln!(self.out, "Restarting. Loading questions...")
    }

    fn start(&mut self) -> io::Result<()> {
        match self.session.start() {
            Ok(()) => {
                self.timer.start();
                writeln!(self.out, "Get ready!")
            }
            Err(err) => terminal::message(&mut self.out, err),
        }
    }

    fn navigate(&mut self, direction: Direction) -> io::Result<()> {
        match self.session.navigate(direction) {
            Ok(_) => self.show_question(),
            Err(err) => terminal::message(&mut self.out, err),
        }
    }

    fn answer(&mut self, option: usize) -> io::Result<()> {
        match self.session.answer(option) {
            Ok(Some(feedback)) => {
                terminal::feedback(&mut self.out, feedback)?;
                self.show_question()
            }
            Ok(None) => terminal::message(&mut self.out, "This question has already been answered."),
            Err(err) => terminal::message(&mut self.out, err),
        }
    }

    fn submit(&mut self) -> io::Result<()> {
        match self.session.finish() {
            Ok(_) => {
                self.timer.stop();
                self.show_report()
            }
            Err(err) => terminal::message(&mut self.out, err),
        }
    }

    fn show_question(&mut self) -> io::Result<()> {
        match self.session.view() {
            Ok(view) => terminal::question(&mut self.out, &view),
            Err(err) => {
                log::error!("Error loading question {}: {err}", self.session.index() + 1);
                terminal::message(&mut self.out, err)
            }
        }
    }

    fn show_report(&mut self) -> io::Result<()> {
        match self.session.report() {
            Some(report) => terminal::report(&mut self.out, report),
            None => Ok(()),
        }
    }
}

/// Resolves the pending future in `slot`, or never if there is none.
async fn settle<F>(slot: &mut Option<F>) -> F::Output
where
    F: Future + Unpin,
{
    match slot {
        Some(fut) => fut.await,
        None => future::pending().await,
    }
}

/// Runs the quiz until the user quits, or until input is exhausted and nothing is
/// left to happen. Returns the output sink.
pub async fn run<S, R, W>(source: &S, limit: u32, input: R, out: W) -> anyhow::Result<W>
where
    S: QuestionSource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut app = App::new(limit, out);
    app.greet()?;

    let mut lines = input.lines();
    let mut open = true;
    let mut loading = Some(Box::pin(source.fetch()));
    loop {
        if !open && loading.is_none() && !app.is_ticking() {
            break;
        }

        tokio::select! {
            biased;
            result = settle(&mut loading) => {
                loading = None;
                app.on_loaded(result)?;
            }
            _ = app.tick() => app.on_tick()?,
            line = lines.next_line(), if open => {
                let Some(line) = line? else {
                    log::debug!("Input closed.");
                    open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match line.parse() {
                    Ok(command) => command,
                    Err(err) => {
                        terminal::message(&mut app.out, err)?;
                        continue;
                    }
                };
                match app.on_command(command)? {
                    Flow::Continue => (),
                    Flow::Restart => {
                        app.restart()?;
                        loading = Some(Box::pin(source.fetch()));
                    }
                    Flow::Quit => break,
                }
            }
        }
    }

    Ok(app.into_inner())
}
