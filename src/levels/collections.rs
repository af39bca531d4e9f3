//! Level 4: arrays, slices and strings

use super::Context;
use crate::errors::GuideError;

/// Join values with single spaces, the way the guide prints sequences
pub fn join_values<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    let mut grades: [i32; 5] = [80, 95, 78, 92, 88];
    ctx.say(format!("The third grade (index 2): {}", grades[2]));

    grades[0] = 82;
    ctx.say(format!("All grades: {}", join_values(&grades)));
    ctx.say(format!(
        "Out-of-range access with get(9): {:?}",
        grades.get(9)
    ));

    // A String owns UTF-8 bytes and knows its own length; no terminator
    let greeting = String::from("Hello");
    ctx.say(format!("The message is: {}", greeting));
    ctx.say(format!(
        "The first letter (index 0): {}",
        greeting.chars().next().unwrap_or(' ')
    ));

    let mut str1 = String::from("Hello");
    let str2 = "World";
    ctx.say(format!("Length of '{}' is: {}", str1, str1.len()));

    str1.push(' ');
    str1.push_str(str2);
    ctx.say(format!("Concatenation (push_str): {}", str1));

    let copy = "Copied Text".to_string();
    ctx.say(format!("Copy (to_string): {}", copy));

    let expected = "Test";
    let actual = String::from("Test");
    if actual == expected {
        ctx.say("Comparison: The strings are identical.");
    }
    ctx.say(format!(
        "Ordering of \"apple\" vs \"banana\": {:?}",
        "apple".cmp("banana")
    ));

    let matrix: [[i32; 3]; 2] = [[1, 2, 3], [4, 5, 6]];
    ctx.say(format!("Element at Row 1, Column 2: {}", matrix[1][2]));

    let cube: [[[i32; 2]; 2]; 2] = [[[1, 2], [3, 4]], [[5, 6], [7, 8]]];
    ctx.say(format!(
        "3D Element (Layer 1, Row 0, Col 1): {}",
        cube[1][0][1]
    ));

    let slice = &grades[1..4];
    ctx.say(format!("Slice of grades [1..4]: {}", join_values(slice)));

    Ok(())
}
