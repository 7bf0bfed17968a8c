/**
* A live cell dies if it has fewer than `minimum` live neighbors.
* A live cell with `minimum` to `maximum` live neighbors lives on to the next generation.
* A live cell with more than `maximum` live neighbors dies.
* A dead cell will be brought back to life if it has exactly `spawn` live neighbors.
*
* The grid is toroidal: neighbor counting wraps around at the edges.
*/
pub mod grid;
pub mod patterns;
pub mod world;

pub use world::Rules;
pub use world::RunState;
pub use world::World;
