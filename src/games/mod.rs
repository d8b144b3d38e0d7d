//! Reference games for exercising the engine
//!
//! Small solved games whose optimal moves are known, which makes them useful
//! for checking that a search converges on the right answer.

mod add_till_target;

pub use add_till_target::AddTillTarget;
