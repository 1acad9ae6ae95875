pub mod ambient;
pub mod cadence;
pub mod clock;
pub mod config;
pub mod constants;
pub mod device;
pub mod dispatch;
pub mod display;
pub mod effects;
pub mod haptics;
pub mod level;
pub mod scheduler;
pub mod sound;

pub use ambient::*;
pub use cadence::*;
pub use clock::*;
pub use config::*;
pub use device::*;
pub use dispatch::*;
pub use display::*;
pub use effects::*;
pub use haptics::*;
pub use level::*;
pub use scheduler::*;
pub use sound::*;
