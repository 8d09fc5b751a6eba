//! Rule sets, one per record type.

pub mod event;
pub mod ticket;
