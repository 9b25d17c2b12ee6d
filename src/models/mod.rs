pub mod coordinates;
pub mod history;
pub mod route;

pub use coordinates::Coordinates;
pub use history::{HistoryEntry, RestoredRoute};
pub use route::{GeneratedRoute, RouteRequest, RouteResponse, RouteType};
