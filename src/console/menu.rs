/// Menu choices of the console surface

use crate::domain::TrackingMode;

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Complete,
    Delete,
    Stats,
    ToggleMode,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::List,
        MenuChoice::Add,
        MenuChoice::Complete,
        MenuChoice::Delete,
        MenuChoice::Stats,
        MenuChoice::ToggleMode,
        MenuChoice::Exit,
    ];

    /// Parse a line of user input ("1" through "7")
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::List => "List habits",
            MenuChoice::Add => "Add habit",
            MenuChoice::Complete => "Complete habit",
            MenuChoice::Delete => "Delete habit",
            MenuChoice::Stats => "View completion stats",
            MenuChoice::ToggleMode => "Toggle increment mode",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// The menu text shown before every choice
pub fn render_menu(mode: TrackingMode) -> String {
    let mut text = format!("\nHabit Tracker - {} Mode\n", mode.display_name());
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, choice.label()));
    }
    text
}
