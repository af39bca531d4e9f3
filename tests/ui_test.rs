// Rendering and key handling tests for the TUI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crustguide::config::GuideConfig;
use crustguide::levels::{self, Context};
use crustguide::ui::app::{App, FocusedPane};
use ratatui::{backend::TestBackend, Terminal};
use std::path::PathBuf;

/// Work directory removed when the test finishes
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = format!("crustguide-ui-{}-{}", name, std::process::id());
        ScratchDir(std::env::temp_dir().join(dir))
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn app_after_run(scratch: &ScratchDir) -> App {
    let mut ctx = Context::new(GuideConfig {
        workdir: scratch.0.clone(),
        ..GuideConfig::default()
    });
    let failures = levels::run_all(&mut ctx);
    App::new(ctx, &failures)
}

fn screen(app: &mut App) -> String {
    let backend = TestBackend::new(140, 40);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_initial_screen() {
    let scratch = ScratchDir::new("initial_screen");
    let mut app = app_after_run(&scratch);
    let text = screen(&mut app);

    assert!(text.contains("Levels"));
    assert!(text.contains("Level 1 Output"));
    assert!(text.contains("Age: 30"));
    assert!(text.contains("empty list"));
    assert_eq!(app.status_message, "Ready!");
}

#[test]
fn test_select_linked_list_level_and_step_heap() {
    let scratch = ScratchDir::new("select_linked_list_level_and_step_heap");
    let mut app = app_after_run(&scratch);
    for _ in 0..20 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.selected_number(), 11, "selection clamps at the last level");

    for _ in 0..3 {
        press(&mut app, KeyCode::Right);
    }
    assert_eq!(app.snapshot_index, 3);
    let text = screen(&mut app);
    assert!(text.contains("List: [ 30 -> 20 -> 10 -> NULL ]"));
    assert!(text.contains("insert_front(30)"));
    assert!(text.contains("LIVE"));

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.snapshot_index, 4);
    assert_eq!(app.status_message, "Already at the last list step");
    assert!(screen(&mut app).contains("FREED"));
}

#[test]
fn test_focus_cycle_and_quit() {
    let scratch = ScratchDir::new("focus_cycle_and_quit");
    let mut app = app_after_run(&scratch);
    assert_eq!(app.focused_pane, FocusedPane::Levels);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_pane, FocusedPane::Output);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_number(), 1, "arrows scroll output, not selection");

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focused_pane, FocusedPane::Heap);

    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.selected_number(), 9);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_opens_on_the_level_that_ran() {
    let mut ctx = Context::new(GuideConfig {
        level: Some(11),
        ..GuideConfig::default()
    });
    let failures = match levels::run_level(&mut ctx, 11) {
        Ok(()) => Vec::new(),
        Err(e) => vec![(11, e)],
    };
    let mut app = App::new(ctx, &failures);

    assert_eq!(app.selected_number(), 11);
    let text = screen(&mut app);
    assert!(text.contains("Level 11 Output"));
    assert!(text.contains("Freeing list memory..."));
    assert!(!text.contains("(no output)"));
}

#[test]
fn test_shortcuts_reach_the_last_levels() {
    let scratch = ScratchDir::new("shortcuts");
    let mut app = app_after_run(&scratch);

    press(&mut app, KeyCode::Char('0'));
    assert_eq!(app.selected_number(), 10);
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.selected_number(), 1);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.selected_number(), 11);
    assert_eq!(app.status_message, "Level 11: Full Data Structure: Linked List");
}
