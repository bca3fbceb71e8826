pub mod ranking;

pub use ranking::rank_top_companies;
