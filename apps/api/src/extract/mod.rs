//! Text Signal Extractor — pulls structured signals (skill keywords,
//! years of experience) out of free text. Used for both resume text and job
//! descriptions that ship without structured tags.
//!
//! Both extractors are total functions: "nothing found" is an empty result,
//! never an error.

pub mod experience;
pub mod skills;

pub use experience::extract_experience_years;
pub use skills::extract_skills;
