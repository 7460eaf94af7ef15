use metra_linalg::{MatrixMxN, VectorN};
use metra_units::{Force, Length, Time, Torque, Velocity};

fn main() {
    let lever = MatrixMxN::<Length, 2, 3>::zeros();
    let force = MatrixMxN::<Force, 3, 4>::zeros();
    let torque: MatrixMxN<Torque, 2, 4> = lever * force;
    let _: MatrixMxN<Torque, 4, 2> = torque.transposed();

    let x = VectorN::<Length, 3>::zeros();
    let v: VectorN<Velocity, 3> = x / Time::from_base(1.0);
    let _: VectorN<Length, 2> = MatrixMxN::<f64, 2, 3>::zeros() * x;
    let _: MatrixMxN<Velocity, 3, 3> = v.outer(&VectorN::<f64, 3>::zeros());
}
