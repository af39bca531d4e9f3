//! Level 1: bindings, primitive types, constants and formatted printing

use super::Context;
use crate::errors::GuideError;

const DAYS_IN_WEEK: i32 = 7;

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    // Bindings are immutable unless declared `mut`
    let age: i32 = 30;
    let salary: f32 = 2500.50;
    let pi: f64 = std::f64::consts::PI;
    let grade: char = 'A';

    ctx.say(format!("Age: {}", age));
    ctx.say(format!("Grade: {}", grade));
    ctx.say(format!("Salary: {:.2}", salary));
    ctx.say(format!("Value of Pi: {:.6}", pi));
    ctx.say(format!("Days in a week: {}", DAYS_IN_WEEK));

    let mut counter = 0u8;
    counter += 1;
    ctx.say(format!("Mutable counter after one increment: {}", counter));

    // Shadowing rebinds a name, possibly with a new type
    let input = "42";
    let input: i32 = input.parse().unwrap_or_default();
    ctx.say(format!("Parsed input by shadowing: {}", input));

    Ok(())
}
