//! Main TUI application state and logic

use crate::catalog::{Lesson, Topic};
use crate::sequencer::playback::{next_preset, Ticker};
use crate::sequencer::{Cursor, Sequencer, Visualization};
use crate::viz::{ArrayViz, ListViz};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{
    render_array_pane, render_header, render_list_pane, render_message_pane, render_status_bar,
    status::format_speed, HeaderRenderData, MessageRenderData, StatusRenderData,
};

/// A playback command, independent of which topic is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Next,
    Previous,
    First,
    Last,
    TogglePlay,
    Reset,
    CycleSpeed,
}

/// The main application state
pub struct App {
    /// Topic currently on screen
    pub topic: Topic,

    pub arrays: Lesson<ArrayViz>,
    pub lists: Lesson<ListViz>,

    /// Auto-advance timer for the topic on screen
    ticker: Ticker,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Lesson revisions (arrays, lists) on screen, None when a redraw is
    /// needed regardless
    drawn: Option<(u64, u64)>,
}

impl App {
    pub fn new(arrays: Lesson<ArrayViz>, lists: Lesson<ListViz>, topic: Topic) -> Self {
        App {
            topic,
            arrays,
            lists,
            ticker: Ticker::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            drawn: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.draw(terminal)?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Resize(..) => self.invalidate(),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn revisions(&self) -> (u64, u64) {
        (
            self.arrays.sequencer().revision(),
            self.lists.sequencer().revision(),
        )
    }

    /// Whether the screen is out of date with the lessons or app state
    pub fn needs_redraw(&self) -> bool {
        self.drawn != Some(self.revisions())
    }

    /// Force the next [`App::draw`] to redraw
    pub fn invalidate(&mut self) {
        self.drawn = None;
    }

    /// Draw the UI if anything changed since the last draw
    ///
    /// Returns whether a frame was drawn.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<bool> {
        if !self.needs_redraw() {
            return Ok(false);
        }
        terminal.draw(|f| self.render(f))?;
        self.drawn = Some(self.revisions());
        Ok(true)
    }

    /// Advance the visible sequencer if its timer is due
    pub fn tick(&mut self, now: Instant) -> bool {
        let advanced = match self.topic {
            Topic::Arrays => self.ticker.poll(self.arrays.sequencer_mut(), now),
            Topic::LinkedLists => self.ticker.poll(self.lists.sequencer_mut(), now),
        };

        if advanced {
            self.status_message = if self.cursor().playing {
                "Playing...".to_string()
            } else {
                "Playback complete".to_string()
            };
        }
        advanced
    }

    pub fn cursor(&self) -> Cursor {
        match self.topic {
            Topic::Arrays => self.arrays.sequencer().cursor(),
            Topic::LinkedLists => self.lists.sequencer().cursor(),
        }
    }

    /// Apply a playback command to the visible sequencer
    pub fn control(&mut self, control: Control) {
        self.invalidate();
        self.status_message = match self.topic {
            Topic::Arrays => apply_control(self.arrays.sequencer_mut(), control),
            Topic::LinkedLists => apply_control(self.lists.sequencer_mut(), control),
        };
    }

    fn select_operation(&mut self, index: usize) {
        let selected = match self.topic {
            Topic::Arrays => self.arrays.select(index),
            Topic::LinkedLists => self.lists.select(index),
        };
        if selected {
            self.status_message = format!("Selected {}", self.operation_name());
        }
    }

    fn cycle_operation(&mut self, forward: bool) {
        match (self.topic, forward) {
            (Topic::Arrays, true) => self.arrays.next_operation(),
            (Topic::Arrays, false) => self.arrays.previous_operation(),
            (Topic::LinkedLists, true) => self.lists.next_operation(),
            (Topic::LinkedLists, false) => self.lists.previous_operation(),
        }
        self.status_message = format!("Selected {}", self.operation_name());
    }

    fn operation_name(&self) -> String {
        match self.topic {
            Topic::Arrays => self.arrays.operation().name().to_string(),
            Topic::LinkedLists => self.lists.operation().name().to_string(),
        }
    }

    /// Show the other topic; both lessons restart so nothing keeps playing
    /// off screen
    pub fn switch_topic(&mut self) {
        self.arrays.sequencer_mut().reset();
        self.lists.sequencer_mut().reset();
        self.ticker.cancel();
        self.topic = self.topic.toggle();
        self.invalidate();
        self.status_message = format!("Switched to {}", self.topic.name());
    }

    fn toggle_list_kind(&mut self) {
        if self.topic != Topic::LinkedLists {
            return;
        }
        let viz = self.lists.sequencer().viz();
        let viz = viz.with_kind(viz.kind().toggle());
        let label = viz.kind().label();
        self.lists.sequencer_mut().set_viz(viz);
        self.status_message = format!("Showing {}", label);
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(frame.area());

        match self.topic {
            Topic::Arrays => {
                let sequencer = self.arrays.sequencer();
                render_array_pane(frame, chunks[1], sequencer.state(), sequencer.is_playing());
                self.render_chrome(frame, &chunks, &self.arrays);
            }
            Topic::LinkedLists => {
                let sequencer = self.lists.sequencer();
                render_list_pane(
                    frame,
                    chunks[1],
                    sequencer.state(),
                    sequencer.viz().kind(),
                    sequencer.is_playing(),
                );
                self.render_chrome(frame, &chunks, &self.lists);
            }
        }
    }

    /// Header, message and status bar are the same for every topic
    fn render_chrome<V: Visualization>(&self, frame: &mut Frame, chunks: &[Rect], lesson: &Lesson<V>)
    where
        V::Action: Clone,
    {
        let sequencer = lesson.sequencer();
        let cursor = sequencer.cursor();

        render_header(
            frame,
            chunks[0],
            HeaderRenderData {
                topic: self.topic,
                operation_names: lesson.operations().iter().map(|op| op.name()).collect(),
                selected: lesson.selected(),
            },
        );

        render_message_pane(
            frame,
            chunks[2],
            MessageRenderData {
                message: sequencer.message(),
                phase: sequencer.current_step().map(|step| step.phase.as_str()),
                cursor,
            },
        );

        render_status_bar(
            frame,
            chunks[3],
            StatusRenderData {
                message: &self.status_message,
                cursor,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.invalidate();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys pick an operation directly
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(n) = c.to_digit(10) {
                    self.select_operation(n as usize - 1);
                }
            }
            KeyCode::Tab => self.cycle_operation(true),
            KeyCode::BackTab => self.cycle_operation(false),
            KeyCode::Right => self.control(Control::Next),
            KeyCode::Left => self.control(Control::Previous),
            KeyCode::Home => self.control(Control::First),
            KeyCode::End | KeyCode::Enter => self.control(Control::Last),
            KeyCode::Backspace | KeyCode::Char('r') | KeyCode::Char('R') => {
                self.control(Control::Reset)
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.control(Control::CycleSpeed),
            KeyCode::Char('t') | KeyCode::Char('T') => self.switch_topic(),
            KeyCode::Char('k') | KeyCode::Char('K') => self.toggle_list_kind(),
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.control(Control::TogglePlay);
                }
            }
            _ => {}
        }
    }
}

fn apply_control<V: Visualization>(sequencer: &mut Sequencer<V>, control: Control) -> String {
    match control {
        Control::Next => {
            if sequencer.next() {
                "Stepped forward".to_string()
            } else {
                "Already at the last step".to_string()
            }
        }
        Control::Previous => {
            if sequencer.previous() {
                "Stepped backward".to_string()
            } else {
                "Already at the first step".to_string()
            }
        }
        Control::First => {
            sequencer.go_to(0);
            "Jumped to start".to_string()
        }
        Control::Last => {
            sequencer.go_to(usize::MAX);
            "Jumped to end".to_string()
        }
        Control::TogglePlay => {
            sequencer.toggle_play();
            if sequencer.is_playing() {
                "Playing...".to_string()
            } else {
                "Paused".to_string()
            }
        }
        Control::Reset => {
            sequencer.reset();
            "Reset".to_string()
        }
        Control::CycleSpeed => {
            let speed = next_preset(sequencer.speed());
            sequencer.set_speed(speed);
            format!("Speed {}", format_speed(sequencer.speed()))
        }
    }
}
