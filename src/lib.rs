pub mod cli;
pub mod ctx;
pub mod forecast;
pub mod io;
pub mod metrics;
pub mod pipeline;
pub mod reference;
pub mod schema;
