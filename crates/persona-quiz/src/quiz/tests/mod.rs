mod common;

mod compatibility;
