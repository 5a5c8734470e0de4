pub mod errors;
pub mod db;
pub mod schema;
pub mod area;
pub mod machine;
pub mod maintenance_log;

#[cfg(test)]
mod tests;
