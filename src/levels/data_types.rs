//! Level 8: enums, and what replaces unions
//!
//! A tagged enum stores one active variant and remembers which one it is, so
//! reading the wrong member is a compile error rather than garbage. The
//! bit-reinterpretation at the end shows what an untagged union would hand
//! back.

use super::Context;
use crate::errors::GuideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn is_weekend(self) -> bool {
        matches!(self, Day::Saturday | Day::Sunday)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending = 10,
    Approved = 20,
    Rejected = 30,
}

/// One value of several possible shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Data {
    Int(i32),
    Float(f32),
    Char(char),
}

impl Data {
    pub fn describe(&self) -> String {
        match self {
            Data::Int(i) => format!("Stored as int: {}", i),
            Data::Float(f) => format!("Stored as float: {:.6}", f),
            Data::Char(c) => format!("Stored as char: {}", c),
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Data::Int(i) => Some(*i),
            _ => None,
        }
    }
}

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    let today = Day::Wednesday;
    let order_status = Status::Approved;

    ctx.say(format!("Today (as an int): {}", today as i32));
    ctx.say(format!("Order Status (as an int): {}", order_status as i32));
    ctx.say(format!(
        "Other statuses: {:?} = {}, {:?} = {}",
        Status::Pending,
        Status::Pending as i32,
        Status::Rejected,
        Status::Rejected as i32
    ));

    if today.is_weekend() {
        ctx.say("It's the weekend!");
    } else {
        ctx.say("It's a weekday.");
    }

    let mut my_data = Data::Int(100);
    ctx.say(my_data.describe());

    my_data = Data::Float(2.5);
    ctx.say(my_data.describe());
    ctx.say(format!(
        "Reading int after storing float: {:?} (the tag says no)",
        my_data.as_int()
    ));
    ctx.say(format!(
        "Same bits reread as an int: {} (Garbage!)",
        2.5f32.to_bits() as i32
    ));

    my_data = Data::Char('A');
    ctx.say(my_data.describe());
    ctx.say(format!(
        "Size of Data: {} bytes (largest member plus tag)",
        std::mem::size_of::<Data>()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants() {
        assert_eq!(Day::Monday as i32, 0);
        assert_eq!(Day::Wednesday as i32, 2);
        assert_eq!(Status::Approved as i32, 20);
        assert!(Day::Sunday.is_weekend());
        assert!(!Day::Friday.is_weekend());
    }

    #[test]
    fn test_inactive_member_is_none() {
        assert_eq!(Data::Float(2.5).as_int(), None);
        assert_eq!(Data::Int(100).as_int(), Some(100));
    }
}
