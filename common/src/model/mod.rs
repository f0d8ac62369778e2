pub mod column;
pub mod form;
pub mod infer;
pub mod response;
pub mod table;
