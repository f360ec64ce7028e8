//! Interactive menu over the planner.
//!
//! Reads menu choices and station names from any `BufRead` and writes to
//! any `Write`, so the binary drives it with stdin/stdout and tests drive
//! it with in-memory buffers. Stations can be entered by name, full
//! identifier or short code.

mod codes;
mod render;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::domain::{CostMode, station_name};
use crate::planner::{Planner, QueryError};

pub use codes::{StationCodes, station_code};
pub use render::format_duration;

/// A main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListStations,
    ShowMap,
    Distance,
    Time,
    Route(CostMode),
    Fare(CostMode),
    Exit,
}

impl MenuChoice {
    /// Parse a menu number (`1`-`9`).
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::ListStations,
            "2" => MenuChoice::ShowMap,
            "3" => MenuChoice::Distance,
            "4" => MenuChoice::Time,
            "5" => MenuChoice::Route(CostMode::Distance),
            "6" => MenuChoice::Route(CostMode::Time),
            "7" => MenuChoice::Fare(CostMode::Distance),
            "8" => MenuChoice::Fare(CostMode::Time),
            "9" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

const MENU: &str = "
\t=======================================================================
\t*                         MAIN MENU                                   *
\t*   1. List all stations                                              *
\t*   2. Show metro map                                                 *
\t*   3. Get shortest distance between two stations                     *
\t*   4. Get shortest time between two stations                         *
\t*   5. Get shortest path (distance-wise)                              *
\t*   6. Get shortest path (time-wise)                                  *
\t*   7. Get fare for shortest path (distance-wise)                     *
\t*   8. Get fare for shortest path (time-wise)                         *
\t*   9. Exit                                                           *
\t=======================================================================";

/// The interactive console.
pub struct Console<'a, R, W> {
    planner: Planner<'a>,
    codes: StationCodes,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Create a console answering queries with `planner`.
    pub fn new(planner: Planner<'a>, input: R, output: W) -> Self {
        let codes = StationCodes::new(planner.graph());
        Self {
            planner,
            codes,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n\t*** WELCOME TO THE METRO ROUTE PLANNER ***")?;

        loop {
            writeln!(self.output, "{MENU}")?;
            self.prompt("\nEnter your choice (1-9): ")?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(
                    self.output,
                    "\nInvalid choice! Please enter a number between 1-9."
                )?;
                continue;
            };

            debug!(?choice, "menu choice");
            if !self.handle(choice)? {
                break;
            }
        }

        writeln!(self.output, "\nThank you for using the metro route planner!")?;
        self.output.flush()
    }

    /// Run one menu entry. Returns false when the console should stop.
    fn handle(&mut self, choice: MenuChoice) -> io::Result<bool> {
        let graph = self.planner.graph();

        match choice {
            MenuChoice::ListStations => render::station_list(&mut self.output, graph)?,
            MenuChoice::ShowMap => render::map(&mut self.output, graph)?,
            MenuChoice::Exit => return Ok(false),
            query => {
                let Some((from, to)) = self.read_endpoints()? else {
                    return Ok(false);
                };
                self.answer(query, &from, &to)?;
            }
        }

        Ok(true)
    }

    /// Answer a station-pair query.
    fn answer(&mut self, choice: MenuChoice, from: &str, to: &str) -> io::Result<()> {
        match choice {
            MenuChoice::Distance => {
                let result = self.planner.shortest_cost(from, to, CostMode::Distance);
                self.report(result, |out, km| render::distance(out, km))
            }
            MenuChoice::Time => {
                let result = self.planner.shortest_cost(from, to, CostMode::Time);
                self.report(result, |out, secs| render::travel_time(out, secs))
            }
            MenuChoice::Route(mode) => {
                let result = self.planner.annotated_route(from, to, mode);
                self.report(result, |out, route| render::route(out, from, to, &route))
            }
            MenuChoice::Fare(mode) => {
                let result = self.planner.fare(from, to, mode);
                self.report(result, |out, fare| render::fare(out, from, to, mode, &fare))
            }
            MenuChoice::ListStations | MenuChoice::ShowMap | MenuChoice::Exit => Ok(()),
        }
    }

    /// Print a query result, or the error it failed with.
    fn report<T>(
        &mut self,
        result: Result<T, QueryError>,
        show: impl FnOnce(&mut W, T) -> io::Result<()>,
    ) -> io::Result<()> {
        match result {
            Ok(value) => show(&mut self.output, value),
            Err(e) => {
                debug!(error = %e, "query failed");
                writeln!(self.output, "\nError: {e}")
            }
        }
    }

    /// Show the code list and read a source and destination.
    ///
    /// Input that names no station is passed through as typed, so the
    /// planner reports it as unknown. Returns `None` at end of input.
    fn read_endpoints(&mut self) -> io::Result<Option<(String, String)>> {
        render::code_list(&mut self.output, &self.codes)?;

        self.prompt("\nEnter source station: ")?;
        let Some(from) = self.read_line()? else {
            return Ok(None);
        };
        self.prompt("Enter destination station: ")?;
        let Some(to) = self.read_line()? else {
            return Ok(None);
        };

        Ok(Some((self.resolve(&from), self.resolve(&to))))
    }

    fn resolve(&self, input: &str) -> String {
        match self.codes.resolve(input) {
            Some(name) => name.to_string(),
            None => station_name(input).to_string(),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Read one trimmed line. Returns `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
