// --- File: crates/showroom_scheduling/src/lib.rs ---
// Declare modules within this crate
pub mod civil;
#[cfg(test)]
mod civil_proptest;
pub mod slots;
#[cfg(test)]
mod slots_test;
pub mod validate;

pub use civil::CivilTimeError;
pub use slots::{
    classify_slots, day_schedule, generate_slots, BookedSpan, BusinessHours, Slot, SlotInterval,
    SlotStatus,
};
pub use validate::{validate_booking, validate_slot, SlotPolicyError};
