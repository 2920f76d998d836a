pub mod states;
pub mod params;
pub mod terrain;
pub mod slope;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod scenario;
