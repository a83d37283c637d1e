mod catalog;
mod common;
