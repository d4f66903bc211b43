pub mod test_context;
