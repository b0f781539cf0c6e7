pub mod obj_file_reader;
