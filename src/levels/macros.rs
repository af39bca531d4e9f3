//! Level 9: constants, macros, conditional compilation and bitwise operators

use super::Context;
use crate::errors::GuideError;

pub const PI: f64 = std::f64::consts::PI;

#[cfg(target_pointer_width = "64")]
const TARGET_NOTE: &str = "DEBUG: compiled for a 64-bit target (a #[cfg] attribute)";
#[cfg(not(target_pointer_width = "64"))]
const TARGET_NOTE: &str = "DEBUG: compiled for a non-64-bit target (a #[cfg] attribute)";

/// Square an expression; the argument is evaluated once, as a value
#[macro_export]
macro_rules! square {
    ($x:expr) => {{
        let value = $x;
        value * value
    }};
}

/// One line per bitwise operator applied to `a` and `b`
pub fn bitwise_table(a: u8, b: u8) -> Vec<(String, u8)> {
    vec![
        (format!("Bitwise AND ({} & {})", a, b), a & b),
        (format!("Bitwise OR ({} | {})", a, b), a | b),
        (format!("Bitwise XOR ({} ^ {})", a, b), a ^ b),
        (format!("Bitwise NOT (!{})", a), !a),
        (format!("Left Shift ({} << 1)", a), a << 1),
        (format!("Right Shift ({} >> 1)", a), a >> 1),
    ]
}

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    let radius = 10.0;
    let area = PI * radius * radius;
    ctx.say(format!("Area with PI constant: {:.6}", area));

    ctx.say(format!("square!(5) macro: {}", square!(5)));
    ctx.say(format!(
        "square!(1 + 4) evaluates its argument first: {}",
        square!(1 + 4)
    ));

    ctx.say("Checking for debug mode...");
    if ctx.config.debug_mode {
        ctx.say("DEBUG: Debug mode is ON. (runtime switch from the command line)");
    } else {
        ctx.say("DEBUG: Debug mode is OFF.");
    }

    if cfg!(debug_assertions) {
        ctx.say("DEBUG: built with debug assertions (cfg!(debug_assertions))");
    } else {
        ctx.say("DEBUG: built without debug assertions");
    }

    ctx.say(TARGET_NOTE);

    for (label, value) in bitwise_table(5, 3) {
        ctx.say(format!("{}: {} (0b{:08b})", label, value, value));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_is_hygienic() {
        assert_eq!(square!(5), 25);
        assert_eq!(square!(1 + 4), 25);
    }

    #[test]
    fn test_bitwise_values() {
        let values: Vec<u8> = bitwise_table(5, 3).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1, 7, 6, 250, 10, 2]);
    }
}
