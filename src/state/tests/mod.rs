mod buffer;
mod common;
