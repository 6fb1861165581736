use crate::utils::error::{ComputeError, Result};
use std::sync::Mutex;

/// Terminal result of a computation: exactly one of a success payload
/// or a failure condition.
#[derive(Debug)]
pub enum Outcome {
    Success(f64),
    Failure(ComputeError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn into_result(self) -> Result<f64> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}

impl From<Result<f64>> for Outcome {
    fn from(result: Result<f64>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err),
        }
    }
}

#[derive(Debug)]
enum Slot {
    Empty,
    Settled(Outcome),
    Taken,
}

/// A write-once cell for an [`Outcome`]. The first `settle` wins; every
/// later write is rejected, even after the outcome has been taken out.
#[derive(Debug)]
pub struct OutcomeCell {
    slot: Mutex<Slot>,
}

impl OutcomeCell {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::Empty),
        }
    }

    pub fn settle(&self, outcome: Outcome) -> Result<()> {
        let mut slot = self.lock();
        match *slot {
            Slot::Empty => {
                *slot = Slot::Settled(outcome);
                Ok(())
            }
            Slot::Settled(_) | Slot::Taken => Err(ComputeError::AlreadySettled),
        }
    }

    pub fn take(&self) -> Option<Outcome> {
        let mut slot = self.lock();
        match std::mem::replace(&mut *slot, Slot::Taken) {
            Slot::Settled(outcome) => Some(outcome),
            Slot::Empty => {
                *slot = Slot::Empty;
                None
            }
            Slot::Taken => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(*self.lock(), Slot::Empty)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Slot> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for OutcomeCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_settle_wins() {
        let cell = OutcomeCell::new();
        assert!(cell.settle(Outcome::Success(16.0)).is_ok());

        let second = cell.settle(Outcome::Success(0.0));
        assert!(matches!(second, Err(ComputeError::AlreadySettled)));

        match cell.take() {
            Some(Outcome::Success(value)) => assert_eq!(value, 16.0),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn take_yields_the_outcome_once() {
        let cell = OutcomeCell::new();
        cell.settle(Outcome::Failure(ComputeError::NegativeInput { value: -3.0 }))
            .unwrap();

        assert!(cell.take().is_some());
        assert!(cell.take().is_none());
    }

    #[test]
    fn settle_is_rejected_even_after_take() {
        let cell = OutcomeCell::new();
        cell.settle(Outcome::Success(4.0)).unwrap();
        cell.take();

        let late = cell.settle(Outcome::Success(9.0));
        assert!(matches!(late, Err(ComputeError::AlreadySettled)));
        assert!(cell.is_settled());
    }

    #[test]
    fn empty_cell_is_not_settled() {
        let cell = OutcomeCell::new();
        assert!(!cell.is_settled());
        assert!(cell.take().is_none());
        // An unsettled take must not block a later settle.
        assert!(cell.settle(Outcome::Success(1.0)).is_ok());
    }
}
