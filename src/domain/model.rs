use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    make: String,
    year: u16,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: u16) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }

    pub fn info(&self) -> String {
        format!("Make: {}, Year: {}", self.make, self.year)
    }
}

/// A vehicle with a model designation. Composes [`Vehicle`] and
/// delegates its info formatting.
#[derive(Debug, Clone)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: u16, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn info(&self) -> String {
        self.vehicle.info()
    }

    pub fn model_info(&self) -> String {
        format!("Model: {}", self.model)
    }
}

/// A caller-supplied value that is either text or numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    /// Text maps to its character count, numbers double.
    pub fn process(&self) -> f64 {
        match self {
            Value::Text(text) => text.chars().count() as f64,
            Value::Number(number) => number * 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl DayKind {
    pub fn of(day: Weekday) -> Self {
        match day {
            Weekday::Sat | Weekday::Sun => DayKind::Weekend,
            _ => DayKind::Weekday,
        }
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayKind::Weekday => write!(f, "Weekday"),
            DayKind::Weekend => write!(f, "Weekend"),
        }
    }
}
