pub mod i8080;

pub use i8080::cpu::{CPU, Flags, Register, RegisterPair, Registers};
pub use i8080::savestates::{SaveStateError, SerializeState};
pub use i8080::{I8080, MEMORY_SIZE, PortInCallback, PortOutCallback};
