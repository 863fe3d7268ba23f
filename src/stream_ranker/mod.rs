pub mod main;
pub mod run;
