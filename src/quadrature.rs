/// data model: function description, method kinds, result records
pub mod model;
/// error taxonomy of the engine
pub mod errors;
/// exact (closed-form) integration
pub mod exact;
/// rectangle, trapezoid and simpson strategies
pub mod methods;
/// orchestrator of the torus volume demo
pub mod torus_task;
