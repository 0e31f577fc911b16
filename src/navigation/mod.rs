mod map_surface;
mod route_planner;
mod screen;

pub use map_surface::MapSurface;
pub use screen::NavigationScreen;
