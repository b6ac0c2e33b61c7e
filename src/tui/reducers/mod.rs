pub mod data_loading;
pub mod navigation;
pub mod presentation;

pub use data_loading::reduce_data_loading;
pub use navigation::reduce_navigation;
pub use presentation::reduce_presentation;
