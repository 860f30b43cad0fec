// Reusable library API — visible to both the CLI and embedding frontends
pub mod errors;
pub mod generator;
pub mod grid;
pub mod letters;
pub mod log;
pub mod palette;
pub mod selection;
pub mod session;
pub mod validator;
pub mod word_list;
