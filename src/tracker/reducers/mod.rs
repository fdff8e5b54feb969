pub mod data_loading;
pub mod lineup;
pub mod recording;
pub mod selection;
pub mod shot;

pub use data_loading::reduce_data_loading;
pub use lineup::reduce_lineup;
pub use recording::reduce_recording;
pub use selection::reduce_selection;
pub use shot::reduce_shot;
