// Card generation: turns a question pool into numbered PNG cards on disk.

pub mod generator;

pub use generator::bingo;
