pub mod advice;
pub mod incidence;
