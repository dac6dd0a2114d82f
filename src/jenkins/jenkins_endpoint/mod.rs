pub mod run_state;
