pub mod screen_writer;
pub mod tap_reader;
