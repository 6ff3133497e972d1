pub mod participant_reader;
pub mod transfer_writer;
