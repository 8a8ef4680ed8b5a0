pub mod archive;
pub mod release;
