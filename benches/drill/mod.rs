mod render;
mod session;

pub use render::bench_render;
pub use session::bench_session;
