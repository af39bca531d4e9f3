//! Level 7: objects through traits
//!
//! Method tables built from function pointers become a trait. Each
//! implementor supplies its own behavior and callers go through `&dyn Vehicle`.

use super::Context;
use crate::errors::GuideError;

pub trait Vehicle {
    fn details(&self) -> String;

    /// Increase speed and describe the result
    fn accelerate(&mut self, amount: u32) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub model: String,
    pub year: u16,
    pub speed: u32,
}

impl Car {
    pub fn new(model: &str, year: u16) -> Self {
        Car {
            model: model.to_string(),
            year,
            speed: 0,
        }
    }
}

impl Vehicle for Car {
    fn details(&self) -> String {
        format!(
            "Car Model: {}, Year: {}, Speed: {}",
            self.model, self.year, self.speed
        )
    }

    fn accelerate(&mut self, amount: u32) -> String {
        self.speed += amount;
        format!("{} is accelerating to {} km/h", self.model, self.speed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bicycle {
    pub speed: u32,
}

impl Vehicle for Bicycle {
    fn details(&self) -> String {
        format!("Bicycle, Speed: {}", self.speed)
    }

    fn accelerate(&mut self, amount: u32) -> String {
        // Legs only go so fast
        self.speed = (self.speed + amount).min(40);
        format!("Bicycle is pedalling at {} km/h", self.speed)
    }
}

pub fn run(ctx: &mut Context) -> Result<(), GuideError> {
    let mut my_car = Car::new("Tesla Model S", 2024);

    ctx.say(my_car.details());
    ctx.say(my_car.accelerate(50));
    ctx.say(my_car.accelerate(30));
    ctx.say(my_car.details());

    let mut garage: Vec<Box<dyn Vehicle>> =
        vec![Box::new(Car::new("Volvo 240", 1989)), Box::new(Bicycle { speed: 0 })];
    for vehicle in garage.iter_mut() {
        ctx.say(vehicle.accelerate(60));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_accumulates_speed() {
        let mut car = Car::new("Tesla Model S", 2024);
        car.accelerate(50);
        assert_eq!(
            car.accelerate(30),
            "Tesla Model S is accelerating to 80 km/h"
        );
        assert_eq!(car.details(), "Car Model: Tesla Model S, Year: 2024, Speed: 80");
    }

    #[test]
    fn test_bicycle_caps_speed() {
        let mut bike = Bicycle { speed: 0 };
        let vehicle: &mut dyn Vehicle = &mut bike;
        vehicle.accelerate(60);
        assert_eq!(vehicle.details(), "Bicycle, Speed: 40");
    }
}
