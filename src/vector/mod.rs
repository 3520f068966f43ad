// Word-frequency vectors — sorted frequency tables and the angle between them.

pub mod angle;
pub mod frequency;
