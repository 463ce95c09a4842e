//! # Recalculation Session
//!
//! A [`Session`] holds the calculation currently on screen and keeps its
//! result in step with it. Every [`Edit`] changes one input, re-runs the pure
//! calculator, and hands the fresh result to each subscribed listener.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use gear_core::calculations::{CalculationItem, GearListInput};
//! use gear_core::session::{Edit, Session};
//!
//! let mut session = Session::new(CalculationItem::Simple(
//!     GearListInput::with_gear_count(3, 900.0, 12.0),
//! ));
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! session.subscribe(move |_, result| sink.lock().unwrap().push(result.clone()));
//!
//! session.apply(Edit::GearCount(2)).unwrap();
//! assert_eq!(seen.lock().unwrap().len(), 1);
//! assert_eq!(session.result().direction.label(), "Reversed");
//! ```

use std::fmt;

use tracing::debug;

use crate::calculations::{CalculationItem, CalculationResult, GearListInput, PlanetaryMode};
use crate::errors::{GearError, GearResult};

/// A single input change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    /// Input speed (rev/min), any calculation
    InputSpeed(f64),
    /// Input torque, any calculation
    InputTorque(f64),
    /// Rebuild a simple train with this many default gears
    GearCount(usize),
    /// One tooth count of a simple train, 1-based gear index
    GearTeeth { index: usize, teeth: f64 },
    /// One tooth count of a compound train, 1-based position Z1..Z4
    StageTeeth { position: usize, teeth: f64 },
    /// Planetary sun tooth count
    SunTeeth(f64),
    /// Planetary ring tooth count
    RingTeeth(f64),
    /// Planetary operating mode
    Mode(PlanetaryMode),
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::InputSpeed(v) => write!(f, "speed {}", v),
            Edit::InputTorque(v) => write!(f, "torque {}", v),
            Edit::GearCount(n) => write!(f, "gears {}", n),
            Edit::GearTeeth { index, teeth } => write!(f, "teeth {} {}", index, teeth),
            Edit::StageTeeth { position, teeth } => write!(f, "z{} {}", position, teeth),
            Edit::SunTeeth(v) => write!(f, "sun {}", v),
            Edit::RingTeeth(v) => write!(f, "ring {}", v),
            Edit::Mode(mode) => write!(f, "mode {}", mode),
        }
    }
}

impl CalculationItem {
    /// Apply one edit in place.
    ///
    /// Fails without changing anything when the edit targets a field this
    /// calculation type does not have, or an index outside its gear list.
    pub fn apply(&mut self, edit: Edit) -> GearResult<()> {
        let calc_type = self.calc_type();
        let not_applicable = || GearError::edit_not_applicable(edit.to_string(), calc_type);

        match (self, edit) {
            (CalculationItem::Simple(input), Edit::InputSpeed(v)) => input.input_speed_rpm = v,
            (CalculationItem::Compound(input), Edit::InputSpeed(v)) => input.input_speed_rpm = v,
            (CalculationItem::Planetary(input), Edit::InputSpeed(v)) => input.input_speed_rpm = v,

            (CalculationItem::Simple(input), Edit::InputTorque(v)) => input.input_torque = v,
            (CalculationItem::Compound(input), Edit::InputTorque(v)) => input.input_torque = v,
            (CalculationItem::Planetary(input), Edit::InputTorque(v)) => input.input_torque = v,

            (CalculationItem::Simple(input), Edit::GearCount(n)) => {
                *input = GearListInput::with_gear_count(n, input.input_speed_rpm, input.input_torque);
            }
            (CalculationItem::Simple(input), Edit::GearTeeth { index, teeth }) => {
                let count = input.gear_count();
                let slot = index
                    .checked_sub(1)
                    .and_then(|i| input.teeth.get_mut(i))
                    .ok_or_else(|| {
                        GearError::invalid_input("index", index.to_string(), format!("Gear index must be 1 to {}", count))
                    })?;
                *slot = teeth;
            }
            (CalculationItem::Compound(input), Edit::StageTeeth { position, teeth }) => {
                let slot = input.teeth_mut(position).ok_or_else(|| {
                    GearError::invalid_input("position", position.to_string(), "Stage position must be 1 to 4")
                })?;
                *slot = teeth;
            }
            (CalculationItem::Planetary(input), Edit::SunTeeth(v)) => input.sun_teeth = v,
            (CalculationItem::Planetary(input), Edit::RingTeeth(v)) => input.ring_teeth = v,
            (CalculationItem::Planetary(input), Edit::Mode(mode)) => input.mode = mode,

            _ => return Err(not_applicable()),
        }
        Ok(())
    }
}

type Listener = Box<dyn FnMut(&CalculationItem, &CalculationResult) + Send>;

/// Current calculation, its latest result, and the listeners to notify.
pub struct Session {
    item: CalculationItem,
    result: CalculationResult,
    listeners: Vec<Listener>,
}

impl Session {
    /// Start a session; the first result is computed immediately.
    pub fn new(item: CalculationItem) -> Self {
        let result = item.calculate();
        Session {
            item,
            result,
            listeners: Vec::new(),
        }
    }

    pub fn item(&self) -> &CalculationItem {
        &self.item
    }

    pub fn result(&self) -> &CalculationResult {
        &self.result
    }

    /// Register a listener called after every recalculation.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&CalculationItem, &CalculationResult) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Apply an edit, recalculate, and notify listeners.
    pub fn apply(&mut self, edit: Edit) -> GearResult<&CalculationResult> {
        self.item.apply(edit)?;
        debug!(%edit, calc_type = self.item.calc_type(), "input changed");
        self.recalculate();
        Ok(&self.result)
    }

    /// Swap in a different calculation, recalculate, and notify listeners.
    pub fn replace(&mut self, item: CalculationItem) -> &CalculationResult {
        self.item = item;
        self.recalculate();
        &self.result
    }

    fn recalculate(&mut self) {
        self.result = self.item.calculate();
        for listener in self.listeners.iter_mut() {
            listener(&self.item, &self.result);
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("item", &self.item)
            .field("result", &self.result)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
