pub mod areas;
pub mod forecast;
pub mod series;
pub mod view;
