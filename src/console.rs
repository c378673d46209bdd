//! Text front end: line-based input, menus and the battle controller built on
//! top of them.

use crate::art::{ArtProvider, Facing};
use crate::battle::capture::{calculate_capture_chance, capture_chance_description};
use crate::battle::controller::{PlayerAction, PlayerController};
use crate::battle::engine::BattleSession;
use crate::battle::state::BattleEvent;
use crate::item::Item;
use crate::monster::Individual;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal. `read_line` returns `None` once input is exhausted.
pub trait Console {
    fn read_line(&mut self) -> Option<String>;
    fn print(&mut self, text: &str);
}

/// Console on stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                log::warn!("failed to read from stdin: {}", err);
                None
            }
        }
    }

    fn print(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        if writeln!(stdout, "{}", text).and_then(|_| stdout.flush()).is_err() {
            log::warn!("stdout is closed");
        }
    }
}

/// Console fed from a fixed list of lines, recording everything printed.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|line| line.to_string()).collect(),
            output: Vec::new(),
        }
    }

    /// Everything printed so far, one entry per line.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Option<String> {
        self.inputs.pop_front()
    }

    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

/// Print `text` and read one trimmed answer.
pub fn prompt(console: &mut dyn Console, text: &str) -> Option<String> {
    console.print(text);
    console.read_line().map(|line| line.trim().to_string())
}

/// Ask for a choice in `1..=len` until a valid one is given, returning it as a
/// zero-based index. `None` on end of input or when there is nothing to pick.
pub fn prompt_index(console: &mut dyn Console, text: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    loop {
        let answer = prompt(console, text)?;
        match answer.parse::<usize>() {
            Ok(choice) if (1..=len).contains(&choice) => return Some(choice - 1),
            _ => console.print(&format!("Please enter a number between 1 and {}.", len)),
        }
    }
}

/// Battle decisions taken by a person at a [`Console`].
pub struct ConsoleController<'a> {
    console: &'a mut dyn Console,
    art: &'a dyn ArtProvider,
}

impl<'a> ConsoleController<'a> {
    pub fn new(console: &'a mut dyn Console, art: &'a dyn ArtProvider) -> Self {
        Self { console, art }
    }

    fn show_status(&mut self, session: &BattleSession<'_>) {
        let opponent = session.opponent();
        let active = session.active();
        self.console
            .print(&format!("===== Round {} =====", session.round()));
        let front = self.art.art_or_name(&opponent.species().name, Facing::Front);
        self.console.print(&front);
        self.console.print(&opponent.to_string());
        if session.round() == 1 {
            let back = self.art.art_or_name(&active.species().name, Facing::Back);
            self.console.print(&back);
        }
        self.console.print(&format!("Your monster: {}", active));
    }

    fn choose_item(&mut self, session: &BattleSession<'_>) -> Option<usize> {
        let bag = session.trainer().bag();
        if bag.is_empty() {
            self.console.print("Your bag is empty.");
            return None;
        }

        for (slot, item) in bag.iter().enumerate() {
            let line = match item {
                Item::Kube(kube) => {
                    let chance = calculate_capture_chance(session.opponent(), kube.capture_chance);
                    format!(
                        "{}. {} - {} (capture chance: {})",
                        slot + 1,
                        kube.name,
                        kube.description,
                        capture_chance_description(chance)
                    )
                }
                other => format!("{}. {} - {}", slot + 1, other.name(), other.description()),
            };
            self.console.print(&line);
        }
        prompt_index(&mut *self.console, "Which item?", bag.len())
    }

    fn choose_switch(&mut self, session: &BattleSession<'_>) -> Option<usize> {
        let team = session.trainer().team();
        for (index, member) in team.iter().enumerate() {
            self.console.print(&format!("{}. {}", index + 1, member));
        }
        let index = prompt_index(&mut *self.console, "Which monster?", team.len())?;

        if index == session.active_index() {
            self.console
                .print(&format!("{} is already fighting.", team[index].name()));
            return None;
        }
        if team[index].is_fainted() {
            self.console
                .print(&format!("{} is knocked out and cannot fight.", team[index].name()));
            return None;
        }
        Some(index)
    }
}

fn end_of_input_action(session: &BattleSession<'_>) -> PlayerAction {
    if session.active().is_fainted() {
        if let Some(team_index) = session.trainer().select_active() {
            log::debug!("input closed during battle; switching to member {}", team_index);
            return PlayerAction::Switch { team_index };
        }
    }
    log::debug!("input closed during battle; attacking");
    PlayerAction::Attack
}

impl PlayerController for ConsoleController<'_> {
    /// End of input sends in the first standing member when the active one is
    /// down, and attacks otherwise.
    fn choose_action(&mut self, session: &BattleSession<'_>) -> PlayerAction {
        self.show_status(session);
        loop {
            self.console.print("1. Attack");
            self.console.print("2. Use an item");
            self.console.print("3. Switch monster");
            let Some(choice) = prompt_index(&mut *self.console, "What will you do?", 3) else {
                return end_of_input_action(session);
            };

            match choice {
                0 => return PlayerAction::Attack,
                1 => {
                    if let Some(slot) = self.choose_item(session) {
                        return PlayerAction::UseItem { slot };
                    }
                }
                _ => {
                    if let Some(team_index) = self.choose_switch(session) {
                        return PlayerAction::Switch { team_index };
                    }
                }
            }
        }
    }

    fn nickname(&mut self, captured: &Individual) -> Option<String> {
        let answer = prompt(
            &mut *self.console,
            &format!("Give {} a nickname? (leave empty to keep it)", captured.name()),
        )?;
        (!answer.is_empty()).then_some(answer)
    }

    fn observe(&mut self, events: &[BattleEvent]) {
        for text in events.iter().filter_map(BattleEvent::format) {
            self.console.print(&text);
        }
    }
}
