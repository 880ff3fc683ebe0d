pub mod accrual;
pub mod merkle;
pub mod signature;
