//! Interactive command loop
//!
//! Steps the fleet, prints its status and then reads menu commands until the
//! user asks for the next step. All range checking of user input happens
//! here, before anything reaches the fleet.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use log::warn;

use elevator_sim::simulation::{Direction, ElevatorId, Floor, SimFleet};

use crate::stats::SimulationStats;

const SEPARATOR_WIDTH: usize = 84;

const MENU: &str = "\nWhat do you want to do?\n\
                    \t0. Exit simulation\n\
                    \t1. Pick floor in the elevator\n\
                    \t2. Press button in the corridor\n\
                    \t3. Nothing (next step)\n\
                    Enter value: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Exit,
    PickFloor,
    CorridorCall,
    NextStep,
    Unused,
}

/// Whitespace-separated token reader with prompts, so answers may be typed on
/// one line or several.
struct Console<R, W> {
    input: R,
    output: W,
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            tokens: VecDeque::new(),
        }
    }

    /// Next token from the input, or None at end of input
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read command input")?;
            if read == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.tokens.pop_front())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.next_token()
    }

    fn separator(&mut self, counter: usize) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{} [counter: {}]", "=".repeat(SEPARATOR_WIDTH), counter)?;
        Ok(())
    }

    fn print_status(&mut self, fleet: &SimFleet, counter: usize) -> Result<()> {
        self.separator(counter)?;
        write!(self.output, "{}", fleet.summary())?;
        self.separator(counter)
    }

    fn reject(&mut self, err: &anyhow::Error) -> Result<()> {
        warn!("Rejected input: {:#}", err);
        writeln!(self.output, "Invalid value provided.")?;
        Ok(())
    }
}

fn parse_choice(token: &str) -> Option<MenuChoice> {
    match token.parse::<u32>().ok()? {
        0 => Some(MenuChoice::Exit),
        1 => Some(MenuChoice::PickFloor),
        2 => Some(MenuChoice::CorridorCall),
        3 => Some(MenuChoice::NextStep),
        _ => Some(MenuChoice::Unused),
    }
}

fn parse_floor(token: &str, fleet: &SimFleet) -> Result<Floor> {
    let floor: Floor = token
        .parse()
        .with_context(|| format!("'{}' is not a floor number", token))?;
    if !fleet.is_valid_floor(floor) {
        bail!("floor {} is outside 0-{}", floor, fleet.top_floor());
    }
    Ok(floor)
}

fn parse_elevator_id(token: &str, fleet: &SimFleet) -> Result<ElevatorId> {
    let id = ElevatorId(
        token
            .parse()
            .with_context(|| format!("'{}' is not an elevator id", token))?,
    );
    if !fleet.is_valid_elevator(id) {
        bail!("elevator {} is outside 0-{}", id, fleet.len() - 1);
    }
    Ok(id)
}

fn parse_direction(token: &str) -> Result<Direction> {
    match token {
        "1" => Ok(Direction::Up),
        "0" => Ok(Direction::Down),
        other => bail!("'{}' is not a direction, expected 1 (up) or 0 (down)", other),
    }
}

/// Run the menu-driven simulation until the user exits or input ends
pub fn run_interactive<R: BufRead, W: Write>(
    fleet: &mut SimFleet,
    stats: &mut SimulationStats,
    input: R,
    output: W,
) -> Result<()> {
    let mut console = Console::new(input, output);

    loop {
        let results = fleet.step();
        stats.record_step(&results);
        console.print_status(fleet, stats.next_report())?;

        loop {
            let Some(token) = console.prompt(MENU)? else {
                return Ok(());
            };

            match parse_choice(&token) {
                None => {
                    let err = anyhow::anyhow!("'{}' is not a menu option", token);
                    console.reject(&err)?;
                }
                Some(MenuChoice::Exit) => return Ok(()),
                Some(MenuChoice::PickFloor) => {
                    let Some(id_token) =
                        console.prompt(&format!("Pick elevator ID (0-{}): ", fleet.len() - 1))?
                    else {
                        return Ok(());
                    };
                    let Some(floor_token) =
                        console.prompt(&format!("Pick floor (0-{}): ", fleet.top_floor()))?
                    else {
                        return Ok(());
                    };

                    let selection = parse_elevator_id(&id_token, fleet)
                        .and_then(|id| Ok((id, parse_floor(&floor_token, fleet)?)));
                    match selection {
                        Ok((id, floor)) => {
                            fleet.select_floor(id, floor);
                            stats.record_floor_selection();
                        }
                        Err(err) => console.reject(&err)?,
                    }
                }
                Some(MenuChoice::CorridorCall) => {
                    let Some(floor_token) =
                        console.prompt(&format!("Pick floor (0-{}): ", fleet.top_floor()))?
                    else {
                        return Ok(());
                    };
                    let Some(direction_token) =
                        console.prompt("Select direction (1-up, 0-down): ")?
                    else {
                        return Ok(());
                    };

                    let call = parse_floor(&floor_token, fleet)
                        .and_then(|floor| Ok((floor, parse_direction(&direction_token)?)));
                    match call {
                        Ok((floor, direction)) => {
                            let dispatch = fleet.dispatch_pickup(floor, direction);
                            stats.record_dispatch(&dispatch);
                            writeln!(
                                console.output,
                                "The elevator with ID {} will pick you up",
                                dispatch.elevator
                            )?;
                        }
                        Err(err) => console.reject(&err)?,
                    }
                }
                Some(MenuChoice::NextStep) => break,
                Some(MenuChoice::Unused) => {}
            }
        }
    }
}
