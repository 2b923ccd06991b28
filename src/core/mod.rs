// Core modules implementing file inspection, transcoding, parsing, and error modeling.
pub mod error;
pub mod json;
pub mod model;
pub mod source;
pub mod utf16;
