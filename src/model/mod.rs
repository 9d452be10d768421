pub mod ballot;
pub mod candidate;
pub mod position;
pub mod tally;
pub mod voter;
