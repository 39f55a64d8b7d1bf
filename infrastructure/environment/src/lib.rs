pub mod dotenv_file;
pub mod process;
