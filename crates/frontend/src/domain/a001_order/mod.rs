pub mod model;
pub mod store;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;
