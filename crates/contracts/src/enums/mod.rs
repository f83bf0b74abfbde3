pub mod gender;
pub mod segment;

pub use gender::{gender_label, Gender, DEFAULT_GENDER};
pub use segment::{is_gender_capable, segment_label, Segment};
