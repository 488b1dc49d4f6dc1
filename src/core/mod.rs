pub mod duration;
pub mod event;
pub mod lanes;
pub mod primitives;
pub mod sales;
pub mod scale;
pub mod time_domain;
pub mod types;

pub use duration::{format_duration, total_duration, total_duration_label};
pub use event::TimelineEvent;
pub use lanes::LaneLayout;
pub use sales::{SalePoint, THRESHOLD_RANGE};
pub use scale::LinearScale;
pub use time_domain::TimeDomain;
pub use types::{PlotArea, Viewport};
