pub mod search_box;
pub mod search_result;

#[cfg(test)]
mod search_box_test;
