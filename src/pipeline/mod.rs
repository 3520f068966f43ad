// Pipelines — end-to-end runs that compose the text and vector stages.

pub mod compare;
