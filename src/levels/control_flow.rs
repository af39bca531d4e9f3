//! Level 2: operators, branching and loops

use super::Context;
use crate::errors::GuideError;

/// Letter grade for a numeric score
pub fn letter_grade(score: u32) -> &'static str {
    if score >= 90 {
        "A (Excellent)"
    } else if score >= 80 {
        "B (Very Good)"
    } else if score >= 70 {
        "C (Good)"
    } else {
        "F (Fail)"
    }
}

/// Verdict for a rank letter; `match` must cover every case, so there is no fall-through
pub fn rank_verdict(rank: char) -> &'static str {
    match rank {
        'A' => "Outstanding performance.",
        'B' => "Very good performance.",
        _ => "Other performance.",
    }
}

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    let a = 10;
    let b = 3;
    ctx.say(format!("Addition (10 + 3): {}", a + b));
    ctx.say(format!("Subtraction (10 - 3): {}", a - b));
    ctx.say(format!("Multiplication (10 * 3): {}", a * b));
    ctx.say(format!("Division (10 / 3): {}", a / b));
    ctx.say(format!("Remainder (10 % 3): {}", a % b));
    ctx.say(format!(
        "Checked division (10 / 0): {:?}",
        10i32.checked_div(0)
    ));

    ctx.say(format!("Is 10 == 3 ? {}", a == b));
    ctx.say(format!("Is 10 != 3 ? {}", a != b));
    ctx.say(format!("Is 10 > 3 ? {}", a > b));

    let age = 20;
    let has_license = true;
    ctx.say(format!(
        "Can drive (age > 18 AND has_license)? {}",
        age > 18 && has_license
    ));
    ctx.say(format!(
        "Is minor OR has license? {}",
        age < 18 || has_license
    ));
    ctx.say(format!("Does NOT have license? {}", !has_license));

    ctx.say(format!("Letter Grade: {}", letter_grade(85)));
    ctx.say(rank_verdict('B'));

    ctx.say_inline("For Loop (1 to 5): ");
    for i in 1..=5 {
        ctx.say_inline(format!("{} ", i));
    }
    ctx.say("");

    ctx.say_inline("While Loop (Count down from 3): ");
    let mut j = 3;
    while j > 0 {
        ctx.say_inline(format!("{} ", j));
        j -= 1;
    }
    ctx.say("");

    // `loop` is an expression: `break` can carry a value out
    let mut n = 1;
    let first_power_over_100 = loop {
        n *= 2;
        if n > 100 {
            break n;
        }
    };
    ctx.say(format!("First power of two over 100: {}", first_power_over_100));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grade_boundaries() {
        assert_eq!(letter_grade(90), "A (Excellent)");
        assert_eq!(letter_grade(85), "B (Very Good)");
        assert_eq!(letter_grade(70), "C (Good)");
        assert_eq!(letter_grade(69), "F (Fail)");
    }

    #[test]
    fn test_rank_verdict_default_arm() {
        assert_eq!(rank_verdict('A'), "Outstanding performance.");
        assert_eq!(rank_verdict('Z'), "Other performance.");
    }
}
