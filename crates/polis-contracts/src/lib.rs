// Wire contracts for the Polis university backend
//
// Every endpoint speaks JSON with camelCase field names and wraps its payload
// in the status/error envelope defined in `common`. A 200 response is not a
// success by itself: the envelope decides (see `SingleResponse::into_result`).

pub mod associations;
pub mod common;
pub mod course;
pub mod student;
pub mod teacher;

pub use associations::*;
pub use common::*;
pub use course::*;
pub use student::*;
pub use teacher::*;
