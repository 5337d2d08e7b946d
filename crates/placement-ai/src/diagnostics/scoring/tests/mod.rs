mod common;
mod coverage;
