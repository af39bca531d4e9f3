//! Level 10: statics, function-local state and command-line arguments

use super::Context;
use crate::errors::GuideError;
use std::sync::atomic::{AtomicU32, Ordering};

// Private to this module; other modules cannot name it
static FILE_SCOPE_VAR: i32 = 100;

/// Bump a counter that lives for the whole program and return its new value
///
/// The static is initialised once and keeps its value between calls.
pub fn static_counter() -> u32 {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    COUNTER.fetch_add(1, Ordering::Relaxed) + 1
}

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    ctx.say(format!("Module-private static: {}", FILE_SCOPE_VAR));

    ctx.say("Calling static_counter 3 times:");
    for _ in 0..3 {
        ctx.say(format!("Static counter is now: {}", static_counter()));
    }

    ctx.say(format!("Program name: {}", ctx.config.program_name));
    ctx.say(format!(
        "Number of arguments (including the program name): {}",
        ctx.config.args.len() + 1
    ));

    if ctx.config.args.is_empty() {
        ctx.say("No extra arguments were passed.");
    } else {
        ctx.say("Arguments passed:");
        let lines: Vec<String> = ctx
            .config
            .args
            .iter()
            .enumerate()
            .map(|(i, arg)| format!("  args[{}]: {}", i + 1, arg))
            .collect();
        for line in lines {
            ctx.say(line);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_counter_keeps_state() {
        let first = static_counter();
        let second = static_counter();
        assert!(second > first);
    }
}
