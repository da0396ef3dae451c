pub mod cursor;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod rng;
