mod max_depth_tests;
mod node_meta_tests;
mod source_span_tests;
mod utils;
mod visitor_tests;
