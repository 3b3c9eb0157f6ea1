mod brief;
mod common;
mod essentials;
