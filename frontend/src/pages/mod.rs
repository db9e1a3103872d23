pub mod approvals;

pub use approvals::*;
