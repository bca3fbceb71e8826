mod company;

pub use company::{CompanyRecord, RankedCompany};
