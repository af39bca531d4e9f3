//! Level 5: structs, type aliases and heap memory

use super::Context;
use crate::errors::GuideError;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub id: u32,
    pub gpa: f32,
}

pub type StudentRecord = Student;

/// Fill a freshly reserved vector with multiples of ten
///
/// Reservation is fallible: an impossible size reports an error instead of
/// aborting the process.
pub fn multiples_of_ten(size: usize) -> Result<Vec<usize>, String> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(size)
        .map_err(|e| format!("Failed to allocate memory: {}", e))?;
    values.extend((0..size).map(|i| i * 10));
    Ok(values)
}

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    let s1 = Student {
        name: String::from("Ahmed"),
        id: 101,
        gpa: 3.8,
    };
    ctx.say(format!("Student (s1) Name: {}, ID: {}", s1.name, s1.id));

    let s2: StudentRecord = Student {
        name: String::from("Fatima"),
        id: 102,
        ..s1.clone()
    };
    ctx.say(format!(
        "Student (s2) Name: {}, ID: {}, GPA copied from s1: {:.1}",
        s2.name, s2.id, s2.gpa
    ));

    match multiples_of_ten(5) {
        Ok(values) => {
            let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            ctx.say(format!("Dynamic Array: {}", rendered.join(" ")));
        }
        Err(message) => {
            ctx.say(message);
            return Ok(());
        }
    }

    if let Err(message) = multiples_of_ten(usize::MAX) {
        ctx.say(format!("Reserving usize::MAX elements: {}", message));
    }

    // Box puts the struct on the heap; it is freed when the box goes out of scope
    let s3 = Box::new(Student {
        name: String::from("Ali"),
        id: 103,
        gpa: 3.5,
    });
    ctx.say(format!("Student (boxed s3): {}, ID: {}", s3.name, s3.id));
    drop(s3);
    ctx.say("Boxed student released by drop.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiples_of_ten() {
        assert_eq!(multiples_of_ten(5).unwrap(), vec![0, 10, 20, 30, 40]);
        assert!(multiples_of_ten(0).unwrap().is_empty());
    }

    #[test]
    fn test_impossible_reservation_is_reported() {
        let err = multiples_of_ten(usize::MAX).unwrap_err();
        assert!(err.starts_with("Failed to allocate memory"));
    }
}
