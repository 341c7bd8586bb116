/// Console session that drives a `HabitTracker` from line input
///
/// This module implements the interactive loop:
/// 1. Prints the menu and reads one choice per line
/// 2. Dispatches the choice to the session, passing habit ids explicitly
/// 3. Applies intents from background tasks between prompts

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::console::intents::Intent;
use crate::console::menu::{render_menu, MenuChoice};
use crate::console::render;
use crate::storage::HabitStorage;
use crate::{AppError, HabitTracker};

/// What the loop should do after handling a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive console over a habit tracking session
pub struct ConsoleSession<S: HabitStorage> {
    tracker: HabitTracker<S>,
}

impl<S: HabitStorage> ConsoleSession<S> {
    pub fn new(tracker: HabitTracker<S>) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &HabitTracker<S> {
        &self.tracker
    }

    /// Run the menu loop until exit, end of input, or a quit intent
    pub async fn run<R, W>(
        &mut self,
        input: R,
        output: &mut W,
        mut intents: mpsc::Receiver<Intent>,
    ) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting console session");
        let mut lines = input.lines();

        loop {
            write(output, &render_menu(self.tracker.mode())).await?;

            let line = match self.read_input(&mut lines, &mut intents, output, "Choose an option (1-7): ").await? {
                Input::Line(line) => line,
                Input::Quit => {
                    write(output, "\nExiting.\n").await?;
                    break;
                }
                Input::Closed => {
                    write(output, "Exiting.\n").await?;
                    break;
                }
            };

            if self.handle_line(&line, &mut lines, &mut intents, output).await? == Flow::Exit {
                break;
            }
        }

        info!("Console session finished");
        Ok(())
    }

    /// Handle one menu choice
    async fn handle_line<R, W>(
        &mut self,
        line: &str,
        lines: &mut Lines<R>,
        intents: &mut mpsc::Receiver<Intent>,
        output: &mut W,
    ) -> Result<Flow, AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Some(choice) = MenuChoice::parse(line) else {
            write(output, "Invalid option.\n").await?;
            return Ok(Flow::Continue);
        };
        debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::List => self.show_list(output).await?,
            MenuChoice::Add => {
                let Input::Line(text) = self.read_input(lines, intents, output, "Enter habit: ").await? else {
                    return end_of_input(output).await;
                };
                match self.tracker.add_habit(&text) {
                    Ok(_) => write(output, "Habit added\n").await?,
                    Err(e) => write(output, &format!("Error adding habit: {}\n", e)).await?,
                }
            }
            MenuChoice::Complete => {
                if self.tracker.list_active().is_empty() {
                    write(output, "No habits to complete.\n").await?;
                    return Ok(Flow::Continue);
                }
                write(output, &render::numbered(self.tracker.list_active())).await?;
                let Input::Line(answer) = self.read_input(lines, intents, output, "Enter habit number: ").await? else {
                    return end_of_input(output).await;
                };
                match self.pick(&answer) {
                    Pick::Found(id) => {
                        self.tracker.toggle_completion(&id);
                        write(output, "Habit status updated.\n").await?;
                    }
                    Pick::OutOfRange => write(output, "Invalid number.\n").await?,
                    Pick::NotANumber => write(output, "Invalid input.\n").await?,
                }
            }
            MenuChoice::Delete => {
                if self.tracker.list_active().is_empty() {
                    write(output, "No habits to delete.\n").await?;
                    return Ok(Flow::Continue);
                }
                write(output, &render::numbered(self.tracker.list_active())).await?;
                let Input::Line(answer) = self.read_input(lines, intents, output, "Enter habit number: ").await? else {
                    return end_of_input(output).await;
                };
                match self.pick(&answer) {
                    Pick::Found(id) => {
                        self.tracker.delete_habit(&id);
                        write(output, "Habit deleted.\n").await?;
                    }
                    Pick::OutOfRange => write(output, "Invalid number.\n").await?,
                    Pick::NotANumber => write(output, "Invalid input.\n").await?,
                }
            }
            MenuChoice::Stats => self.show_stats(output).await?,
            MenuChoice::ToggleMode => {
                let mode = self.tracker.toggle_mode();
                write(output, &format!("Switched to mode: {}\n", mode)).await?;
            }
            MenuChoice::Exit => {
                write(output, "Exiting.\n").await?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    async fn show_list<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<(), AppError> {
        let text = render::habit_list(self.tracker.list_active(), self.tracker.mode());
        write(output, &text).await
    }

    async fn show_stats<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<(), AppError> {
        let mut text = render::summary(&self.tracker.summary());

        let collections = self.tracker.collections();
        for habit in collections.each_time_habits.iter().chain(&collections.daily_habits) {
            if let Some(stats) = self.tracker.stats_for(&habit.id) {
                text.push_str(&render::habit_stats(&stats));
            }
        }

        write(output, &text).await
    }

    /// Show `text` and wait for a line, applying intents that arrive meanwhile
    async fn read_input<R, W>(
        &self,
        lines: &mut Lines<R>,
        intents: &mut mpsc::Receiver<Intent>,
        output: &mut W,
        text: &str,
    ) -> Result<Input, AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write(output, text).await?;

        loop {
            // Lines already typed are answered before a queued intent
            tokio::select! {
                biased;
                line = lines.next_line() => {
                    return Ok(match line? {
                        Some(line) => Input::Line(line),
                        None => Input::Closed,
                    });
                }
                Some(intent) = intents.recv() => {
                    debug!("Applying intent: {:?}", intent);
                    match intent {
                        Intent::Show => {
                            write(output, "\n").await?;
                            self.show_list(output).await?;
                            write(output, text).await?;
                        }
                        Intent::Quit => return Ok(Input::Quit),
                    }
                }
            }
        }
    }

    /// Resolve a typed 1-based number to a habit in the active list
    fn pick(&self, answer: &str) -> Pick {
        let answer = answer.trim();
        let digits = answer.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(answer);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Pick::NotANumber;
        }
        if answer.starts_with('-') {
            return Pick::OutOfRange;
        }

        // Too many digits for usize is still a number, just not a listed one
        digits
            .parse::<usize>()
            .ok()
            .and_then(|position| self.tracker.id_at_position(position))
            .map_or(Pick::OutOfRange, Pick::Found)
    }
}

/// Result of waiting for one line of input
enum Input {
    Line(String),
    Closed,
    Quit,
}

enum Pick {
    Found(crate::domain::HabitId),
    OutOfRange,
    NotANumber,
}

async fn end_of_input<W: AsyncWrite + Unpin>(output: &mut W) -> Result<Flow, AppError> {
    write(output, "\nExiting.\n").await?;
    Ok(Flow::Exit)
}

async fn write<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<(), AppError> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
