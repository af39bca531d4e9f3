//! The guide's levels
//!
//! Each level is a plain function that demonstrates one group of language
//! features and prints what it does into the [`Context`] transcript. Levels
//! share nothing but the context, so any one of them can run alone.
//!
//! | # | Module           | Topic                                   |
//! |---|------------------|-----------------------------------------|
//! | 1 | [`basics`]       | bindings, types, constants, printing    |
//! | 2 | [`control_flow`] | operators, `if`, `match`, loops         |
//! | 3 | [`functions`]    | functions and references                |
//! | 4 | [`collections`]  | arrays and strings                      |
//! | 5 | [`structs`]      | structs and heap memory                 |
//! | 6 | [`advanced`]     | file I/O and function pointers          |
//! | 7 | [`traits`]       | objects through traits                  |
//! | 8 | [`data_types`]   | enums and unions                        |
//! | 9 | [`macros`]       | macros, conditional compilation, bits   |
//! |10 | [`storage`]      | statics and command-line arguments      |
//! |11 | [`linked_list`]  | a singly linked list on a bounded heap  |

pub mod advanced;
pub mod basics;
pub mod collections;
pub mod control_flow;
pub mod data_types;
pub mod functions;
pub mod linked_list;
pub mod macros;
pub mod storage;
pub mod structs;
pub mod traits;

use crate::config::GuideConfig;
use crate::errors::GuideError;
use crate::snapshot::{ListSnapshot, Transcript};
use log::{info, warn};

/// Level number used for the opening and closing banners
pub const BANNER_LEVEL: u32 = 0;

const RULE: &str = "===========================================";

/// One entry of the level registry
pub struct Level {
    pub number: u32,
    pub title: &'static str,
    pub run: fn(&mut Context) -> Result<(), GuideError>,
}

static LEVELS: [Level; 11] = [
    Level {
        number: 1,
        title: "The Bare Essentials",
        run: basics::run,
    },
    Level {
        number: 2,
        title: "Operations & Control Flow",
        run: control_flow::run,
    },
    Level {
        number: 3,
        title: "Functions & References",
        run: functions::run,
    },
    Level {
        number: 4,
        title: "Arrays & Strings",
        run: collections::run,
    },
    Level {
        number: 5,
        title: "Structs & Heap Memory",
        run: structs::run,
    },
    Level {
        number: 6,
        title: "Advanced Topics",
        run: advanced::run,
    },
    Level {
        number: 7,
        title: "Objects Through Traits",
        run: traits::run,
    },
    Level {
        number: 8,
        title: "Specialized Data Types (enum & union)",
        run: data_types::run,
    },
    Level {
        number: 9,
        title: "Macros & Bitwise Operations",
        run: macros::run,
    },
    Level {
        number: 10,
        title: "Storage & Command-Line Arguments",
        run: storage::run,
    },
    Level {
        number: 11,
        title: "Full Data Structure: Linked List",
        run: linked_list::run,
    },
];

/// All levels in the order they run
pub fn all() -> &'static [Level] {
    &LEVELS
}

/// Look up a level by number
pub fn find(number: u32) -> Result<&'static Level, GuideError> {
    LEVELS
        .iter()
        .find(|level| level.number == number)
        .ok_or(GuideError::UnknownLevel {
            number,
            available: LEVELS.len(),
        })
}

/// Shared state handed to every level
#[derive(Debug)]
pub struct Context {
    pub config: GuideConfig,
    pub terminal: Transcript,
    /// List states recorded by the linked list level, oldest first
    pub list_history: Vec<ListSnapshot>,
    current_level: u32,
}

impl Context {
    pub fn new(config: GuideConfig) -> Self {
        Context {
            config,
            terminal: Transcript::new(),
            list_history: Vec::new(),
            current_level: BANNER_LEVEL,
        }
    }

    /// Print a full line for the running level
    pub fn say(&mut self, text: impl Into<String>) {
        self.terminal.println(text, self.current_level);
    }

    /// Print without a newline for the running level
    pub fn say_inline(&mut self, text: impl Into<String>) {
        self.terminal.print(text, self.current_level);
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }
}

/// Run a single level, printing its header first
pub fn run_level(ctx: &mut Context, number: u32) -> Result<(), GuideError> {
    let level = find(number)?;
    ctx.current_level = level.number;
    info!("running level {}: {}", level.number, level.title);
    ctx.say("");
    ctx.say(format!("--- Level {}: {} ---", level.number, level.title));

    let result = (level.run)(ctx);
    if let Err(e) = &result {
        warn!("level {} failed: {}", level.number, e);
        ctx.say(format!("Error: {}", e));
    }
    ctx.current_level = BANNER_LEVEL;
    result
}

/// Run every level in order between the banners
///
/// A failing level does not stop the ones after it. The failures are
/// returned in the order they happened.
pub fn run_all(ctx: &mut Context) -> Vec<(u32, GuideError)> {
    opening_banner(ctx);
    let mut failures = Vec::new();
    for level in all() {
        if let Err(e) = run_level(ctx, level.number) {
            failures.push((level.number, e));
        }
    }
    closing_banner(ctx);
    failures
}

pub fn opening_banner(ctx: &mut Context) {
    ctx.terminal.println(RULE, BANNER_LEVEL);
    ctx.terminal
        .println("Welcome to your Language Reference Guide", BANNER_LEVEL);
    ctx.terminal.println(RULE, BANNER_LEVEL);
}

pub fn closing_banner(ctx: &mut Context) {
    ctx.terminal.println("", BANNER_LEVEL);
    ctx.terminal.println(RULE, BANNER_LEVEL);
    ctx.terminal
        .println("Reference Guide complete. End of program.", BANNER_LEVEL);
    ctx.terminal.println(RULE, BANNER_LEVEL);
}
