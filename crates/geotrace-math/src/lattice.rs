//! Index conversions for row-major 2D/3D lattices.
//!
//! Linear indices start at zero at the lattice origin and increase first
//! along X, then Y, then Z.

/// Linear index of lattice cell `(x, y)` in a lattice `dim_x` cells wide.
pub fn xy_to_index(x: usize, y: usize, dim_x: usize) -> usize {
    x + y * dim_x
}

/// Lattice cell `(x, y)` for a linear index.
pub fn index_to_xy(index: usize, dim_x: usize) -> (usize, usize) {
    (index % dim_x, index / dim_x)
}

/// Linear index of lattice cell `(x, y, z)` in a `dim_x` by `dim_y` lattice.
pub fn xyz_to_index(x: usize, y: usize, z: usize, dim_x: usize, dim_y: usize) -> usize {
    x + y * dim_x + z * dim_x * dim_y
}

/// Lattice cell `(x, y, z)` for a linear index.
pub fn index_to_xyz(index: usize, dim_x: usize, dim_y: usize) -> (usize, usize, usize) {
    let plane = dim_x * dim_y;
    let z = index / plane;
    let y = (index % plane) / dim_x;
    let x = (index % plane) % dim_x;
    (x, y, z)
}
