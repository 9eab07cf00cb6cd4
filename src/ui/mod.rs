/// Terminal front-end: line prompts and the summary table.
pub mod prompt;
pub mod table;
