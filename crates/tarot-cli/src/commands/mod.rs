pub mod cards;
pub mod read;
pub mod spreads;
