use metra_linalg::{Matrix3x3, Vector3};
use metra_units::{AngularMomentum, AngularVelocity, Frequency, MomentOfInertia};

fn main() {
    let inertia = Matrix3x3::<MomentOfInertia>::identity();
    let omega = Vector3::new(
        AngularVelocity::from_base(1.0),
        AngularVelocity::zero(),
        AngularVelocity::zero(),
    );
    let h: Vector3<AngularMomentum> = inertia * omega;

    // rad/s と 1/s は同じ角運動量を与える
    let per_second = Vector3::new(Frequency::from_base(1.0), Frequency::zero(), Frequency::zero());
    let h2: Vector3<AngularMomentum> = inertia * per_second;
    assert_eq!(h, h2);

    // 角運動量 / 角速度 で慣性モーメントに戻る
    let back: MomentOfInertia = h.x() / omega.x();
    assert_eq!(back, inertia.xx());
}
