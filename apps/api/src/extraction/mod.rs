// Text-to-structure extraction.
// Every extractor is a pure, total function of the raw input text: missing data
// degrades to a placeholder (or `None`), never to an error.

pub mod cascade;
pub mod contact;
pub mod education;
pub mod experience;
pub mod skills;
pub mod summary;
