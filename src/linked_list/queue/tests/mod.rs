mod handle;
mod model;
