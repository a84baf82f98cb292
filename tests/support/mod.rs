#![allow(dead_code)]

pub mod quotes;
