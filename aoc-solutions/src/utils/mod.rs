pub mod instructions;
pub mod report;
