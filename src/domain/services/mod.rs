pub mod trash_info_parser;
