//! Level 3: functions, borrowing and pass-by-reference

use super::Context;
use crate::errors::GuideError;

pub fn add_numbers(num1: i32, num2: i32) -> i32 {
    num1 + num2
}

pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Add five through a mutable borrow; the caller sees the change
pub fn add_five(num: &mut i32) {
    *num += 5;
}

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    ctx.say(greeting("Ayoub"));

    let result = add_numbers(10, 20);
    ctx.say(format!("Result of addition (10+20): {}", result));

    let mut my_number = 10;
    {
        let reference = &my_number;
        ctx.say(format!("Original value of my_number: {}", my_number));
        ctx.say(format!(
            "Address held by the reference: {:p}",
            reference
        ));
        ctx.say(format!("Value behind the reference (*reference): {}", *reference));
    }

    ctx.say(format!("my_number before function call: {}", my_number));
    add_five(&mut my_number);
    ctx.say(format!("my_number after function call: {}", my_number));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_five_mutates_through_borrow() {
        let mut n = 10;
        add_five(&mut n);
        assert_eq!(n, 15);
        assert_eq!(add_numbers(10, 20), 30);
    }
}
