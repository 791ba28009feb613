// Resume ↔ job matching: catalog tables, text signal extraction, scoring, and the HTTP handlers.
// The scorer is pure; handlers only validate input and shape responses.

pub mod catalog;
pub mod categories;
pub mod detect;
pub mod handlers;
pub mod scorer;
pub mod weights;
