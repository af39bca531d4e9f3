//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus
//! - **[`panes`]** — stateless render functions for each visible pane (levels,
//!   output, heap, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with a [`Context`] whose levels
//! have already run and call [`App::run`] to start the event loop.
//!
//! [`Context`]: crate::levels::Context
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
