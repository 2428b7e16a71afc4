pub mod serve_names;
