mod companies;

pub use companies::get_top_companies;
