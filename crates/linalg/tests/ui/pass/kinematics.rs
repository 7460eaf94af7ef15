use metra_linalg::Vector3;
use metra_units::{Acceleration, AngularAcceleration, AngularVelocity, Length, Velocity};

fn main() {
    let omega = Vector3::new(
        AngularVelocity::zero(),
        AngularVelocity::zero(),
        AngularVelocity::from_base(1.0),
    );
    let alpha = Vector3::<AngularAcceleration>::zeros();
    let r = Vector3::new(Length::from_base(1.0), Length::zero(), Length::zero());

    let v: Vector3<Velocity> = omega % r;
    let centripetal: Vector3<Acceleration> = omega % v;
    let tangential: Vector3<Acceleration> = alpha % r;
    let _ = centripetal + tangential;

    let speed: Velocity = v.length();
    let _: f64 = (v / speed).into_array()[0].value();
}
