pub mod dmem;
