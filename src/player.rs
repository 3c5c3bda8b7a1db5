pub mod console;
pub mod perfect;
pub mod random;

pub use console::ConsolePlayer;
pub use perfect::PerfectAi;
pub use random::RandomAi;
